use indicatif::{ProgressBar, ProgressStyle};
use log::debug;
use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE},
    Client,
};
use serde::Serialize;
use std::{env, error::Error, fs, path::PathBuf};

use crate::request::GenerationRequest;

#[derive(Debug, Serialize)]
struct TextToImageRequestBody {
    inputs: String,
    parameters: TextToImageParameters,
}

#[derive(Debug, Serialize)]
struct TextToImageParameters {
    negative_prompt: String,
    height: i32,
    width: i32,
}

/// Locate the Hugging Face access token the same way the hub tooling does:
/// `HF_TOKEN`, then `HUGGING_FACE_HUB_TOKEN`, then the token file written by
/// `huggingface-cli login`. Returns `None` when no token exists; the request
/// then goes out unauthenticated and the service rejects it at call time.
pub fn api_token() -> Option<String> {
    for var in ["HF_TOKEN", "HUGGING_FACE_HUB_TOKEN"] {
        if let Ok(token) = env::var(var) {
            if !token.trim().is_empty() {
                return Some(token.trim().to_string());
            }
        }
    }

    let hf_home = env::var("HF_HOME")
        .map(PathBuf::from)
        .ok()
        .or_else(|| dirs::home_dir().map(|home| home.join(".cache").join("huggingface")));

    let token = fs::read_to_string(hf_home?.join("token")).ok()?;
    let token = token.trim();
    if token.is_empty() {
        None
    } else {
        Some(token.to_string())
    }
}

pub fn build_headers(token: Option<&str>) -> Result<HeaderMap, Box<dyn Error>> {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(ACCEPT, HeaderValue::from_static("image/png"));
    if let Some(token) = token {
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", token))?,
        );
    }
    Ok(headers)
}

pub fn create_spinner(message: String) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
            .template("{spinner:.cyan} {msg}"),
    );
    spinner.enable_steady_tick(100);
    spinner.set_message(message);

    spinner
}

/// Submit the resolved request to the inference service and return the raw
/// image bytes. One attempt, no retry; any failure propagates to the caller.
pub async fn generate(
    client: &Client,
    base_url: &str,
    request: &GenerationRequest,
) -> Result<Vec<u8>, Box<dyn Error>> {
    let url = format!("{}/{}", base_url, request.model);
    let body = TextToImageRequestBody {
        inputs: request.final_prompt(),
        parameters: TextToImageParameters {
            negative_prompt: request.negative.clone(),
            height: request.height,
            width: request.width,
        },
    };
    debug!("POST {}", url);

    let headers = build_headers(api_token().as_deref())?;
    let spinner = create_spinner("Generating image...".to_string());

    let response = client
        .post(&url)
        .headers(headers)
        .json(&body)
        .send()
        .await?;

    spinner.finish_and_clear();

    if !response.status().is_success() {
        let status = response.status();
        let message = response.text().await.unwrap_or_default();
        eprintln!("Generation failed with status code: {}", status);
        if !message.is_empty() {
            eprintln!("Response error message: {}", message);
        }
        return Err(format!("inference request failed: {} {}", status, message).into());
    }

    Ok(response.bytes().await?.to_vec())
}
