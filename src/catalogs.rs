pub const INFERENCE_API_BASE: &str = "https://api-inference.huggingface.co/models";

pub const DEFAULT_NEGATIVE: &str = "blurry";
pub const DEFAULT_DIMENSION: i32 = 1024;
pub const DEFAULT_OUTPUT: &str = "output.png";

/// Scene prompts drawn from when `--prompt` is not given.
pub const RANDOM_PROMPTS: [&str; 16] = [
    "A cozy cabin nestled in a snow-covered forest, with smoke curling from the chimney and a warm glow emanating from its windows.",
    "An otherworldly cityscape where skyscrapers reach towards a multi-colored sky, with flying vehicles zipping between them.",
    "A serene lakeside scene at dusk, with a lone rowboat gently drifting on the water and the sky painted in shades of orange and purple.",
    "A bustling marketplace in a vibrant, exotic city, with merchants selling their wares under colorful awnings and crowds of people milling about.",
    "A futuristic space station orbiting a distant planet, with sleek metallic structures and ships coming and going against the backdrop of a star-filled sky.",
    "A whimsical garden filled with oversized flowers and talking animals, bathed in the soft light of a magical sunset.",
    "A hidden cave deep within a jungle, illuminated by bioluminescent plants and home to ancient ruins shrouded in mystery.",
    "A steampunk-inspired cityscape with towering clockwork structures and airships soaring through the smoggy sky.",
    "A fantastical underwater kingdom where mermaids swim among colorful coral reefs and schools of tropical fish.",
    "A post-apocalyptic wasteland dominated by crumbling skyscrapers and twisted metal wreckage, with a lone figure scavenging for resources.",
    "A mystical forest blanketed in mist, with towering trees adorned with glowing runes and ethereal spirits drifting through the air.",
    "A quaint countryside village nestled between rolling hills, with thatched-roof cottages and a meandering river flowing nearby.",
    "A high-tech laboratory buzzing with activity, filled with scientists conducting experiments amidst rows of blinking consoles and futuristic machinery.",
    "A grand castle perched atop a rugged mountain peak, surrounded by swirling clouds and guarded by majestic dragons.",
    "A surreal dreamscape where gravity seems to shift and reality bends, with floating islands and surreal landscapes stretching into infinity.",
    "A beautiful person walking on the beach",
];

/// Style names drawn from when `--style` is not given.
pub const IMAGE_STYLES: [&str; 19] = [
    "Cinematic",
    "Photographic",
    "Anime",
    "Manga",
    "Digital Art",
    "Pixel Art",
    "Fantasy Art",
    "Neonpunk",
    "3D Model",
    "Realistic",
    "Cartoon/Animated",
    "Impressionistic",
    "Surreal/Fantastical",
    "Minimalist",
    "Vintage/Retro",
    "Abstract",
    "Photorealistic",
    "Gothic/Dark",
    "Pop Art",
];

/// Default model pool. Every entry must support the text-to-image task on the
/// Hugging Face Inference API; a user-supplied `--model` is not checked
/// against this list.
pub const MODELS: [&str; 3] = [
    "stabilityai/stable-diffusion-xl-base-1.0",
    "runwayml/stable-diffusion-v1-5",
    "ehristoforu/dalle-3-xl-v2",
];
