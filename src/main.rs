use std::process::ExitCode;

use chrono::Utc;
use good_bike_weather::forecast::build_http_client;
use good_bike_weather::{
    BikeWeatherConfig, BikeWeatherError, Credentials, NwsForecastClient, PushoverClient,
    RunOutcome, logging, run,
};

async fn check(config: BikeWeatherConfig) -> Result<RunOutcome, BikeWeatherError> {
    let credentials = Credentials::from_env()?;

    let http = build_http_client(&config.forecast)?;
    let forecast = NwsForecastClient::new(http.clone(), config.forecast.url.clone());
    let notifier = PushoverClient::from_config(http, &config.notification, credentials);

    run(&config, &forecast, &notifier, Utc::now()).await
}

fn fail(err: &BikeWeatherError) -> ExitCode {
    eprintln!("{}", err.user_message());
    ExitCode::from(err.exit_code())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let config = match BikeWeatherConfig::load() {
        Ok(config) => config,
        Err(err) => return fail(&err),
    };

    if let Err(err) = logging::init(&config.logging) {
        eprintln!("{err:#}");
        return ExitCode::FAILURE;
    }

    match check(config).await {
        Ok(outcome) => {
            tracing::info!("Run finished: {:?}", outcome);
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::debug!("Run failed: {:?}", err);
            fail(&err)
        }
    }
}
