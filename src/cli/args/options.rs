use clap::ValueEnum;
use profile_explorer::ResponsePolicy;

/// How out-of-order responses are applied, as spelled on the command line.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum ResponsesArg {
    Latest,
    LastArrival,
}

impl From<ResponsesArg> for ResponsePolicy {
    fn from(value: ResponsesArg) -> Self {
        match value {
            ResponsesArg::Latest => ResponsePolicy::Latest,
            ResponsesArg::LastArrival => ResponsePolicy::LastArrival,
        }
    }
}

/// Output formats supported by the CLI utility.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Plain,
    Json,
}
