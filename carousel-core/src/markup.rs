/// Reader for the slider page fragment: a container element whose `<li>`
/// children are the slides, in document order.
use nom::{
    branch::alt,
    bytes::complete::{is_not, tag, take_until, take_while1},
    character::complete::{char, multispace0, multispace1},
    combinator::opt,
    error::{Error, ErrorKind},
    multi::many0,
    sequence::{delimited, preceded, terminated, tuple},
    IResult,
};

use crate::carousel::Carousel;
use crate::error::{CarouselError, Result};

/// A parsed slider: the container's id and one label per slide
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SliderMarkup {
    pub container_id: Option<String>,
    pub slides: Vec<String>,
}

impl SliderMarkup {
    /// Build a carousel whose slide payloads are the labels.
    pub fn into_carousel(self, slide_width: u32) -> Result<Carousel<String>> {
        Carousel::new(self.slides, slide_width)
    }
}

type Attribute<'a> = (&'a str, Option<&'a str>);

/// Parse a slider fragment such as
/// `<ul id="my-slider"><li>One</li><li>Two</li></ul>`.
pub fn parse_slider(input: &str) -> Result<SliderMarkup> {
    match slider(input) {
        Ok((rest, markup)) if rest.is_empty() => Ok(markup),
        Ok((rest, _)) => Err(CarouselError::markup(format!(
            "unexpected content after the slider container: {:?}",
            preview(rest)
        ))),
        Err(e) => Err(CarouselError::markup(format!("failed to parse slider: {:?}", e))),
    }
}

/// Parse a slider fragment and check that its container has the given id.
pub fn find_slider(input: &str, id: &str) -> Result<SliderMarkup> {
    let markup = parse_slider(input)?;
    match markup.container_id.as_deref() {
        Some(found) if found == id => Ok(markup),
        Some(found) => Err(CarouselError::markup(format!(
            "expected container #{id}, found #{found}"
        ))),
        None => Err(CarouselError::markup(format!(
            "expected container #{id}, found one without an id"
        ))),
    }
}

fn slider(input: &str) -> IResult<&str, SliderMarkup> {
    let (input, _) = trivia(input)?;
    let (input, (name, attributes)) = open_tag(input)?;
    let (input, slides) = many0(preceded(trivia, list_item))(input)?;
    let (input, _) = trivia(input)?;
    let (input, _) = close_tag(name)(input)?;
    let (input, _) = trivia(input)?;

    let container_id = attributes
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case("id"))
        .and_then(|(_, value)| *value)
        .map(str::to_string);

    Ok((
        input,
        SliderMarkup {
            container_id,
            slides,
        },
    ))
}

fn list_item(input: &str) -> IResult<&str, String> {
    let (rest, (name, _)) = open_tag(input)?;
    if !name.eq_ignore_ascii_case("li") {
        return Err(nom::Err::Error(Error::new(input, ErrorKind::Verify)));
    }
    let (input, body) = item_body(rest)?;
    let (input, _) = close_tag("li")(input)?;
    Ok((input, label(body)))
}

/// Content up to the `</li>` matching an already opened item.
///
/// Tag names compare case-insensitively and nested items are counted, so a
/// list inside a slide stays part of that slide.
fn item_body(input: &str) -> IResult<&str, &str> {
    let mut depth = 0usize;
    let mut offset = 0;
    while let Some(found) = input[offset..].find('<') {
        let at = offset + found;
        let rest = &input[at..];
        if close_tag("li")(rest).is_ok() {
            if depth == 0 {
                return Ok((rest, &input[..at]));
            }
            depth -= 1;
        } else if matches!(open_tag(rest), Ok((_, (name, _))) if name.eq_ignore_ascii_case("li")) {
            depth += 1;
        }
        offset = at + 1;
    }
    Err(nom::Err::Error(Error::new(input, ErrorKind::TakeUntil)))
}

fn open_tag(input: &str) -> IResult<&str, (&str, Vec<Attribute>)> {
    let (input, _) = char('<')(input)?;
    let (input, name) = name(input)?;
    let (input, attributes) = many0(preceded(multispace1, attribute))(input)?;
    let (input, _) = multispace0(input)?;
    let (input, _) = char('>')(input)?;
    Ok((input, (name, attributes)))
}

fn close_tag<'a>(expected: &'a str) -> impl Fn(&'a str) -> IResult<&'a str, &'a str> {
    move |input: &'a str| {
        let (rest, found) = delimited(tag("</"), name, preceded(multispace0, char('>')))(input)?;
        if found.eq_ignore_ascii_case(expected) {
            Ok((rest, found))
        } else {
            Err(nom::Err::Error(Error::new(input, ErrorKind::Tag)))
        }
    }
}

fn attribute(input: &str) -> IResult<&str, Attribute> {
    let (input, key) = name(input)?;
    let (input, value) = opt(preceded(
        tuple((multispace0, char('='), multispace0)),
        attribute_value,
    ))(input)?;
    Ok((input, (key, value)))
}

fn attribute_value(input: &str) -> IResult<&str, &str> {
    alt((
        delimited(char('"'), take_until("\""), char('"')),
        delimited(char('\''), take_until("'"), char('\'')),
        is_not(" \t\r\n>"),
    ))(input)
}

fn name(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == ':')(input)
}

/// Whitespace and HTML comments between elements
fn trivia(input: &str) -> IResult<&str, ()> {
    let (input, _) = multispace0(input)?;
    let (input, _) = many0(terminated(comment, multispace0))(input)?;
    Ok((input, ()))
}

fn comment(input: &str) -> IResult<&str, &str> {
    delimited(tag("<!--"), take_until("-->"), tag("-->"))(input)
}

/// Text content of a slide: nested tags dropped, whitespace collapsed.
fn label(body: &str) -> String {
    let mut text = String::with_capacity(body.len());
    let mut in_tag = false;
    for c in body.chars() {
        match c {
            '<' => {
                in_tag = true;
                text.push(' ');
            }
            '>' if in_tag => in_tag = false,
            _ if !in_tag => text.push(c),
            _ => {}
        }
    }

    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&amp;", "&")
}

fn preview(rest: &str) -> String {
    rest.chars().take(24).collect()
}
