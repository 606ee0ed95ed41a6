use clap::Parser;

/// Command-line arguments parser for converting LabelMe JSON annotations to
/// YOLO bounding-box label files.
#[derive(Parser, Debug, Clone)]
#[command(version, long_about = None)]
pub struct Args {
    /// Directory containing LabelMe JSON files
    #[arg(short = 'd', long = "json_dir")]
    pub json_dir: String,

    /// Directory where the YOLO .txt label files are written
    #[arg(short = 'o', long = "output_dir")]
    pub output_dir: String,

    /// The ordered label list; class ids follow list order
    #[arg(use_value_delimiter = true, required = true)]
    pub label_list: Vec<String>,
}
