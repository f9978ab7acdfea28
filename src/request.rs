use colored::Colorize;
use rand::{thread_rng, Rng};

use crate::catalogs::{
    DEFAULT_DIMENSION, DEFAULT_NEGATIVE, DEFAULT_OUTPUT, IMAGE_STYLES, MODELS, RANDOM_PROMPTS,
};
use crate::cli::Args;

/// A fully resolved image-generation request. Every field holds a concrete
/// value by the time this struct exists; nothing optional reaches the remote
/// call.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub prompt: String,
    pub style: String,
    pub model: String,
    pub negative: String,
    pub height: i32,
    pub width: i32,
    pub output: String,
}

/// Use the supplied value if there is one, otherwise compute the fallback.
fn resolve_field<T>(supplied: Option<T>, fallback: impl FnOnce() -> T) -> T {
    supplied.unwrap_or_else(fallback)
}

fn pick(catalog: &[&str]) -> String {
    let idx = thread_rng().gen_range(0..catalog.len());
    catalog[idx].to_string()
}

pub fn resolve(args: Args) -> GenerationRequest {
    GenerationRequest {
        prompt: resolve_field(args.prompt, || pick(&RANDOM_PROMPTS)),
        style: resolve_field(args.style, || pick(&IMAGE_STYLES)),
        model: resolve_field(args.model, || pick(&MODELS)),
        negative: resolve_field(args.negative, || DEFAULT_NEGATIVE.to_string()),
        height: resolve_field(args.height, || DEFAULT_DIMENSION),
        width: resolve_field(args.width, || DEFAULT_DIMENSION),
        output: resolve_field(args.output, || DEFAULT_OUTPUT.to_string()),
    }
}

impl GenerationRequest {
    /// The prompt actually sent to the model, with the style prefixed as a
    /// directive.
    pub fn final_prompt(&self) -> String {
        format!("Style={}. {}", self.style, self.prompt)
    }

    pub fn print_settings(&self) {
        println!("{}", "------------------------".dimmed());
        println!("{} : {}", "Prompt  ".bold(), self.prompt);
        println!("{} : {}", "Model   ".bold(), self.model);
        println!("{} : {}", "Negative".bold(), self.negative);
        println!("{} : {}", "Style   ".bold(), self.style);
        println!("{} : {}", "Height  ".bold(), self.height);
        println!("{} : {}", "Width   ".bold(), self.width);
        println!("{}", "------------------------".dimmed());
    }
}
