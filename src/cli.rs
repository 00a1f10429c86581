use clap::Parser;

#[derive(Parser)]
#[command(version, about = "Rewrite a mihomo base config into a runtime config", long_about = None)]
pub struct Args {
    #[arg(short, long, help = "Overwrite profile, accept TOML file path")]
    pub profile: String,

    #[arg(short, long, help = "Base config YAML to enrich, defaults to an empty config")]
    pub base: Option<String>,

    #[arg(short, long, help = "Config output path, defaults to stdout")]
    pub output: Option<String>,

    #[arg(short, long, help = "Only load the named subscription")]
    pub subscription: Option<String>,

    #[arg(short, long, help = "Emit debug log")]
    pub verbose: bool,
}
