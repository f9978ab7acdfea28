mod catalogs;
mod cli;
mod generate;
mod request;
mod save;

use clap::Parser;
use colored::Colorize;
use std::error::Error;

use crate::catalogs::INFERENCE_API_BASE;
use crate::cli::Args;
use crate::generate::generate;
use crate::request::resolve;
use crate::save::save_image;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenv::dotenv().ok();
    env_logger::init();

    let args = Args::parse();
    let request = resolve(args);
    request.print_settings();

    let client = reqwest::Client::new();
    let image = generate(&client, INFERENCE_API_BASE, &request).await?;
    save_image(&image, &request.output)?;

    println!("Image saved to {}", request.output.bold().green());
    Ok(())
}
