use std::io;

use arara::{AraraClient, AraraError, Config, SendMessage};

fn required_env(name: &str) -> Result<String, io::Error> {
    std::env::var(name).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{name} environment variable is required"),
        )
    })
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let api_key = required_env("ARARA_API_KEY")?;
    let receiver = required_env("ARARA_RECEIVER")?;
    let template = std::env::var("ARARA_TEMPLATE").unwrap_or_else(|_| "welcome".to_owned());
    let variables = match std::env::var("ARARA_VARIABLES") {
        Ok(raw) => serde_json::from_str(&raw)?,
        Err(_) => serde_json::Map::new(),
    };

    let mut config = Config::builder(api_key);
    if let Ok(base_url) = std::env::var("ARARA_BASE_URL") {
        config = config.base_url(base_url);
    }
    let client = AraraClient::new(config.build()?);
    let request = SendMessage::parse(receiver, template)?.with_variables(variables);

    match client.send_message(request).await {
        Ok(response) => {
            println!("id: {:?}, status: {:?}", response.id(), response.status());
            Ok(())
        }
        Err(AraraError::Api(err)) if err.is_auth_error() => {
            eprintln!("API key rejected: {err}");
            Err(err.into())
        }
        Err(err) => {
            eprintln!("send failed (status {}): {err}", err.status_code());
            Err(err.into())
        }
    }
}
