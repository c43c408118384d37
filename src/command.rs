use crate::{arguments::Command, console::Console, error::ApplicationError, options::Options};
use itertools::Itertools;
use scope_path::{Path, qualified_type_to_path, type_to_path};

const INDENT: &str = "  ";

/// Runs a command and returns false if its check does not hold.
pub async fn execute(
    command: &Command,
    options: &Options,
    console: &mut (dyn Console + Send + Sync),
) -> Result<bool, ApplicationError> {
    match command {
        Command::Encode { segments } => {
            crate::debug!(
                options,
                console,
                "encoding segments {}",
                segments.iter().map(|segment| format!("{segment:?}")).join(", ")
            );

            write_line(console, Path::from_segments(segments).serialize()).await?;
        }
        Command::Decode { path } => {
            let path = Path::deserialize(path)?;

            crate::debug!(options, console, "decoded {} segments", path.depth());

            for (depth, segment) in path.segments().iter().enumerate() {
                write_line(console, &format!("{}{}", INDENT.repeat(depth), segment)).await?;
            }
        }
        Command::Contains { ancestor, path } => {
            let ancestor = Path::deserialize(ancestor)?;
            let path = Path::deserialize(path)?;
            let contained = ancestor.is_parent_of(&path);

            crate::debug!(
                options,
                console,
                "checked {:?} against ancestors {:?}",
                ancestor,
                path.ancestors().collect::<Vec<_>>()
            );

            write_line(console, &contained.to_string()).await?;

            return Ok(contained);
        }
        Command::Type { qualifier, name } => {
            let path = if let Some(name) = name {
                type_to_path(qualifier, name)
            } else {
                qualified_type_to_path(qualifier)
            };

            write_line(console, path.serialize()).await?;
        }
    }

    Ok(true)
}

async fn write_line(
    console: &mut (dyn Console + Send + Sync),
    line: &str,
) -> Result<(), ApplicationError> {
    console.write_stdout(line.as_bytes()).await?;
    console.write_stdout("\n".as_bytes()).await?;

    Ok(())
}
