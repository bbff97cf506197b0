//! Conversion sessions that bind a formatter and name unnamed paths.

use std::borrow::Cow;

use crate::{
    error::{ConvertError, MissingFormatterError},
    formatter::{PathElement, PathFormatter},
    parser::{self, PathSummary},
    Point,
};

/// Prefix used for paths converted without a name.
pub const DEFAULT_NAME_PREFIX: &str = "Unnamed_";

/// Converts path data using a bound formatter.
///
/// Paths parsed without a name are given `<prefix><n>` where `n` counts up
/// from 1 for each converter, so independent converters never share a
/// sequence.
#[derive(Clone, Debug)]
pub struct PathConverter<F> {
    formatter: Option<F>,
    name_prefix: String,
    next_unnamed: u64,
}

impl<F> Default for PathConverter<F> {
    fn default() -> Self {
        Self {
            formatter: None,
            name_prefix: DEFAULT_NAME_PREFIX.into(),
            next_unnamed: 1,
        }
    }
}

impl<F> PathConverter<F> {
    /// Creates a converter with no formatter bound.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a converter bound to the given formatter.
    pub fn with_formatter(formatter: F) -> Self {
        Self {
            formatter: Some(formatter),
            ..Self::default()
        }
    }

    /// Sets the prefix used to name paths that are parsed without a name.
    pub fn with_name_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.name_prefix = prefix.into();
        self
    }

    /// Binds a formatter, returning the previously bound one.
    pub fn set_formatter(&mut self, formatter: F) -> Option<F> {
        self.formatter.replace(formatter)
    }

    pub fn formatter(&self) -> Option<&F> {
        self.formatter.as_ref()
    }

    pub fn formatter_mut(&mut self) -> Option<&mut F> {
        self.formatter.as_mut()
    }

    /// Consumes the converter, returning the bound formatter.
    pub fn into_formatter(self) -> Option<F> {
        self.formatter
    }
}

impl<F: PathFormatter> PathConverter<F> {
    /// Parses `path_data`, streaming primitives to the bound formatter as
    /// they are read.
    ///
    /// If the data is malformed the formatter may already have received
    /// part of the path. See [`parse_buffered`](Self::parse_buffered) for an
    /// all or nothing alternative.
    pub fn parse(
        &mut self,
        path_data: &str,
        name: Option<&str>,
    ) -> Result<PathSummary, ConvertError> {
        let formatter = self.formatter.as_mut().ok_or(MissingFormatterError)?;
        let name = path_name(&self.name_prefix, &mut self.next_unnamed, name);
        Ok(parser::parse(path_data, &name, formatter)?)
    }

    /// Parses `path_data`, only sending primitives to the bound formatter
    /// once the entire path has been read successfully.
    ///
    /// On error the formatter is left untouched.
    pub fn parse_buffered(
        &mut self,
        path_data: &str,
        name: Option<&str>,
    ) -> Result<PathSummary, ConvertError> {
        let formatter = self.formatter.as_mut().ok_or(MissingFormatterError)?;
        let name = path_name(&self.name_prefix, &mut self.next_unnamed, name);
        let mut buffer = CallBuffer::default();
        let summary = match parser::parse(path_data, &name, &mut buffer) {
            Ok(summary) => summary,
            Err(e) => {
                log::warn!("discarding {} buffered calls for {name}: {e}", buffer.0.len());
                return Err(e.into());
            }
        };
        buffer.replay(formatter);
        Ok(summary)
    }
}

/// Returns the given name or generates the next one in sequence.
fn path_name<'a>(prefix: &str, next_unnamed: &mut u64, name: Option<&'a str>) -> Cow<'a, str> {
    match name {
        Some(name) => Cow::Borrowed(name),
        None => {
            let name = format!("{prefix}{next_unnamed}");
            *next_unnamed += 1;
            Cow::Owned(name)
        }
    }
}

/// A recorded formatter call.
#[derive(Clone, PartialEq, Debug)]
enum Call {
    Prologue(String),
    Element(PathElement),
    Arc {
        radii: Point<f32>,
        x_axis_rotation: f32,
        large_arc: bool,
        sweep: bool,
        end: Point<f32>,
        start: Point<f32>,
    },
    Epilogue,
}

/// Records calls so they can be replayed in order onto another formatter.
///
/// Arcs are kept as arcs so the target formatter's own
/// [`arc_to`](PathFormatter::arc_to) decides how they are drawn.
#[derive(Default)]
struct CallBuffer(Vec<Call>);

impl CallBuffer {
    fn replay(&self, formatter: &mut impl PathFormatter) {
        for call in &self.0 {
            match call {
                Call::Prologue(name) => formatter.prologue(name),
                Call::Element(element) => element.replay(formatter),
                Call::Arc {
                    radii,
                    x_axis_rotation,
                    large_arc,
                    sweep,
                    end,
                    start,
                } => formatter.arc_to(*radii, *x_axis_rotation, *large_arc, *sweep, *end, *start),
                Call::Epilogue => formatter.epilogue(),
            }
        }
    }
}

impl PathFormatter for CallBuffer {
    fn prologue(&mut self, name: &str) {
        self.0.push(Call::Prologue(name.into()));
    }

    fn epilogue(&mut self) {
        self.0.push(Call::Epilogue);
    }

    fn move_to(&mut self, point: Point<f32>) {
        self.0.push(Call::Element(PathElement::MoveTo(point)));
    }

    fn line_to(&mut self, point: Point<f32>) {
        self.0.push(Call::Element(PathElement::LineTo(point)));
    }

    fn quad_curve_to(&mut self, control: Point<f32>, end: Point<f32>) {
        self.0
            .push(Call::Element(PathElement::QuadTo { control, end }));
    }

    fn curve_to(&mut self, control1: Point<f32>, control2: Point<f32>, end: Point<f32>) {
        self.0.push(Call::Element(PathElement::CurveTo {
            control1,
            control2,
            end,
        }));
    }

    fn arc_to(
        &mut self,
        radii: Point<f32>,
        x_axis_rotation: f32,
        large_arc: bool,
        sweep: bool,
        end: Point<f32>,
        start: Point<f32>,
    ) {
        self.0.push(Call::Arc {
            radii,
            x_axis_rotation,
            large_arc,
            sweep,
            end,
            start,
        });
    }

    fn close_path(&mut self) {
        self.0.push(Call::Element(PathElement::Close));
    }
}
