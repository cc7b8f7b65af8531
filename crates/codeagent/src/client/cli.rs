use std::path::PathBuf;

#[derive(Debug, clap::Parser)]
#[command(name = "client")]
#[command(about = "Call a running codeagent server")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,

    /// Base URL of the server
    #[arg(long, env = "CODEAGENT_URL", global = true, default_value = "http://127.0.0.1:12000")]
    pub url: String,

    /// Output the raw JSON response
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Show system and model server status
    #[clap(name = "status")]
    Status,

    /// Start the simulated model server
    #[clap(name = "start")]
    Start,

    /// Stop the simulated model server
    #[clap(name = "stop")]
    Stop,

    /// Request generated code
    #[clap(name = "generate")]
    Generate(GenerateOptions),

    /// Request an analysis of a source file
    #[clap(name = "analyze")]
    Analyze(AnalyzeOptions),

    /// Send a chat message
    #[clap(name = "chat")]
    Chat(ChatOptions),

    /// Upload project files for a file-type tally
    #[clap(name = "upload")]
    Upload(UploadOptions),
}

#[derive(Debug, clap::Args)]
pub struct GenerateOptions {
    /// What the code should do
    pub prompt: String,

    /// Target language
    #[arg(short, long, default_value = "python")]
    pub language: String,

    /// Requested complexity
    #[arg(short, long, default_value = "standard")]
    pub complexity: String,

    /// Ask for tests alongside the code
    #[arg(long)]
    pub include_tests: bool,
}

#[derive(Debug, clap::Args)]
pub struct AnalyzeOptions {
    /// File whose contents are sent for analysis
    pub path: PathBuf,

    /// Kind of analysis
    #[arg(short = 't', long = "type", default_value = "general")]
    pub analysis_type: String,

    /// Skip suggestions
    #[arg(long)]
    pub no_suggestions: bool,
}

#[derive(Debug, clap::Args)]
pub struct ChatOptions {
    /// Message to send
    pub message: String,

    /// Optional conversation context
    #[arg(long)]
    pub context: Option<String>,
}

#[derive(Debug, clap::Args)]
pub struct UploadOptions {
    /// Files to upload
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,
}
