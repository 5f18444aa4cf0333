use clap::Parser;
use inquire::{InquireError, Text};
use skycast_core::{Config, OpenMeteo, WeatherError, WeatherReport};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "skycast", version, about = "Current weather lookup via Open-Meteo")]
pub struct Cli {
    /// City to look up. Without it, an interactive prompt loop starts.
    pub city: Option<String>,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let config = Config::load()?;
        let client = OpenMeteo::new(&config)?;

        match self.city {
            Some(city) => {
                let city = city.trim();
                if city.is_empty() {
                    anyhow::bail!("City name cannot be empty.");
                }
                // One-shot mode: a failed lookup is the command's result,
                // so it must surface as a non-zero exit.
                if let Err(err) = show_weather(&client, city).await {
                    anyhow::bail!(render_error(&err));
                }
            }
            None => prompt_loop(&client).await?,
        }

        Ok(())
    }
}

/// Read-eval loop: one lookup per prompt, `quit`/`exit` to stop.
///
/// Lookup failures are rendered and the loop continues; only a broken
/// terminal ends it early.
async fn prompt_loop(client: &OpenMeteo) -> anyhow::Result<()> {
    println!("skycast — current weather via Open-Meteo");
    println!("Enter 'quit' or 'exit' to stop.");

    loop {
        let city = match Text::new("City name:").prompt() {
            Ok(input) => input,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(err) => return Err(err.into()),
        };

        let city = city.trim();
        if city.is_empty() {
            println!("City name cannot be empty.");
            continue;
        }
        if is_exit_command(city) {
            break;
        }

        if let Err(err) = show_weather(client, city).await {
            eprintln!("{}", render_error(&err));
        }
    }

    println!("Goodbye!");
    Ok(())
}

async fn show_weather(client: &OpenMeteo, city: &str) -> Result<(), WeatherError> {
    let report = client.lookup(city).await?;
    println!("{}", render_report(&report));
    Ok(())
}

fn is_exit_command(input: &str) -> bool {
    matches!(input.to_lowercase().as_str(), "quit" | "exit")
}

fn render_report(report: &WeatherReport) -> String {
    let rule = "=".repeat(40);
    format!(
        "\n{rule}\nWeather for {}\n{rule}\n  \
         Description: {}\n  \
         Temperature: {}\n  \
         Humidity:    {}\n  \
         Wind Speed:  {}\n{rule}",
        report.city, report.description, report.temperature, report.humidity, report.wind,
    )
}

fn render_error(err: &WeatherError) -> String {
    match err {
        WeatherError::LocationNotFound(city) => {
            format!("Could not find location for '{city}'. Please check the spelling.")
        }
        other => format!("Error fetching weather data: {other}"),
    }
}
