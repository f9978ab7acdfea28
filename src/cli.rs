use clap::Parser;

/// Generate a random image with optional parameters.
#[derive(Debug, Default, Parser)]
#[command(name = "txt2img", version, about)]
pub struct Args {
    /// Prompt for the image generation
    #[arg(long)]
    pub prompt: Option<String>,

    /// Style for the image generation
    #[arg(long)]
    pub style: Option<String>,

    /// Model for the image generation
    #[arg(long)]
    pub model: Option<String>,

    /// Negative prompt for the image generation. Defaults to 'blurry'
    #[arg(long)]
    pub negative: Option<String>,

    /// Height of the image. Default: 1024
    #[arg(long, allow_negative_numbers = true)]
    pub height: Option<i32>,

    /// Width of the image. Default: 1024
    #[arg(long, allow_negative_numbers = true)]
    pub width: Option<i32>,

    /// Output file name/path. Default: 'output.png'
    #[arg(long)]
    pub output: Option<String>,
}
