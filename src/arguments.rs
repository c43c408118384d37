use clap::{Parser, Subcommand};

#[derive(Parser)]
#[clap(about = "Encode, decode and compare hierarchical scope paths", version)]
pub struct Arguments {
    #[clap(subcommand)]
    pub command: Command,
    #[clap(long, global = true, help = "Set a log prefix")]
    pub log_prefix: Option<String>,
    #[clap(
        long,
        global = true,
        help = "Show debug logs",
        env = "SCOPE_PATH_DEBUG"
    )]
    pub debug: bool,
}

#[derive(Clone, Debug, Eq, PartialEq, Subcommand)]
pub enum Command {
    #[clap(about = "Serialize raw segment names into a path")]
    Encode {
        #[clap(help = "Raw segment names from the outermost scope")]
        segments: Vec<String>,
    },
    #[clap(about = "Print raw segment names of a serialized path")]
    Decode {
        #[clap(help = "Serialized path")]
        path: String,
    },
    #[clap(about = "Check if a path is a parent of or equal to another")]
    Contains {
        #[clap(help = "Serialized parent path")]
        ancestor: String,
        #[clap(help = "Serialized path")]
        path: String,
    },
    #[clap(about = "Convert a type into a path")]
    Type {
        #[clap(help = "Namespace, or a fully-qualified type name if no name is given")]
        qualifier: String,
        #[clap(help = "Simple type name")]
        name: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_encode_command() {
        let arguments = Arguments::parse_from(["scope-path", "encode", "com.example", "a/b"]);

        assert_eq!(
            arguments.command,
            Command::Encode {
                segments: vec!["com.example".into(), "a/b".into()]
            }
        );
        assert!(!arguments.debug);
    }

    #[test]
    fn parse_global_options_after_command() {
        let arguments = Arguments::parse_from([
            "scope-path",
            "decode",
            "foo/bar",
            "--debug",
            "--log-prefix",
            "ide: ",
        ]);

        assert_eq!(
            arguments.command,
            Command::Decode {
                path: "foo/bar".into()
            }
        );
        assert!(arguments.debug);
        assert_eq!(arguments.log_prefix.as_deref(), Some("ide: "));
    }

    #[test]
    fn parse_type_command_with_qualified_name() {
        assert_eq!(
            Arguments::parse_from(["scope-path", "type", "com.example.MyTest"]).command,
            Command::Type {
                qualifier: "com.example.MyTest".into(),
                name: None
            }
        );
    }
}
