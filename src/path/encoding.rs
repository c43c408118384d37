use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::take_while1,
    character::complete::{char, none_of},
    combinator::{all_consuming, recognize},
    error::{Error, ErrorKind},
    multi::{many0_count, separated_list0},
};
use std::{borrow::Cow, iter::repeat_n};

pub const SEPARATOR: char = '/';
pub const ESCAPE: char = '\\';

const SPECIAL_CHARACTERS: &str = "/\\";

/// Escapes separators in a raw segment name.
///
/// Escape markers stay as they are unless they precede a separator or end
/// the name. Those runs are doubled so they can't be read as escaping the
/// character that follows them.
pub fn escape(name: &str) -> Cow<'_, str> {
    if !name.contains(SEPARATOR) && !name.ends_with(ESCAPE) {
        return name.into();
    }

    let mut escaped = String::with_capacity(name.len() + 2);
    let mut escapes = 0;

    for character in name.chars() {
        match character {
            ESCAPE => escapes += 1,
            SEPARATOR => {
                escaped.extend(repeat_n(ESCAPE, 2 * escapes + 1));
                escaped.push(SEPARATOR);
                escapes = 0;
            }
            _ => {
                escaped.extend(repeat_n(ESCAPE, escapes));
                escaped.push(character);
                escapes = 0;
            }
        }
    }

    escaped.extend(repeat_n(ESCAPE, 2 * escapes));

    escaped.into()
}

/// Reverses [`escape`] for a name that is already known to be canonical.
pub fn unescape(name: &str) -> Cow<'_, str> {
    if !name.contains(ESCAPE) {
        return name.into();
    }

    let mut unescaped = String::with_capacity(name.len());
    let mut escapes = 0;

    for character in name.chars() {
        if character == ESCAPE {
            escapes += 1;
            continue;
        }

        unescaped.extend(repeat_n(
            ESCAPE,
            if character == SEPARATOR {
                escapes / 2
            } else {
                escapes
            },
        ));
        unescaped.push(character);
        escapes = 0;
    }

    unescaped.extend(repeat_n(ESCAPE, escapes / 2));

    unescaped.into()
}

/// Splits an escaped path into its escaped segments.
///
/// On failure, returns the byte offset of the dangling escape markers at the
/// end of the path.
pub fn split(path: &str) -> Result<Vec<&str>, usize> {
    segments(path)
        .map(|(_, segments)| segments)
        .map_err(|error| match error {
            nom::Err::Error(error) | nom::Err::Failure(error) => path.len() - error.input.len(),
            nom::Err::Incomplete(_) => path.len(),
        })
}

fn segments(input: &str) -> IResult<&str, Vec<&str>> {
    all_consuming(separated_list0(char(SEPARATOR), segment)).parse(input)
}

fn segment(input: &str) -> IResult<&str, &str> {
    recognize(many0_count(alt((
        escape_sequence,
        recognize(none_of(SPECIAL_CHARACTERS)),
    ))))
    .parse(input)
}

// An odd run of escape markers escapes the separator after it. An even run
// before a separator leaves the separator as a delimiter.
fn escape_sequence(input: &str) -> IResult<&str, &str> {
    let (rest, markers) = escapes(input)?;

    match (markers.len() % 2, rest.chars().next()) {
        (1, Some(SEPARATOR)) => recognize((escapes, char(SEPARATOR))).parse(input),
        (1, None) => Err(nom::Err::Error(Error::new(input, ErrorKind::Escaped))),
        _ => Ok((rest, markers)),
    }
}

fn escapes(input: &str) -> IResult<&str, &str> {
    take_while1(|character: char| character == ESCAPE).parse(input)
}
