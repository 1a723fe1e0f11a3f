use clap::ValueEnum;
use namecheck_core::OutputFormat;

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum OutputFormatArg {
    Summary,
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Summary => Self::Summary,
            OutputFormatArg::Json => Self::Json,
        }
    }
}
