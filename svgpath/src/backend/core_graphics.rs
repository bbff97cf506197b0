//! C# source for the CoreGraphics drawing API.

use std::fmt::{self, Write};

use crate::{formatter::PathFormatter, Point};

/// Formatter that emits each path as a C# method drawing on a `CGContext`.
///
/// The method is named after the path and ends by filling and stroking the
/// accumulated path.
///
/// The first error returned by the writer stops all further output and is
/// reported by [`into_inner`](Self::into_inner).
///
/// ```
/// use svgpath::{backend::CoreGraphicsFormatter, PathConverter};
///
/// let mut converter = PathConverter::with_formatter(CoreGraphicsFormatter::new(String::new()));
/// converter.parse("M1 2 L3 4", Some("line")).unwrap();
/// let source = converter.into_formatter().unwrap().into_inner().unwrap();
/// assert_eq!(
///     source,
///     "\tstatic void line (CGContext c)\n\t{\n\t\tc.MoveTo (1f, 2f);\n\t\tc.AddLineToPoint (3f, 4f);\n\t\tc.FillPath ();\n\t\tc.StrokePath ();\n\t}\n\n"
/// );
/// ```
#[derive(Clone, Debug)]
pub struct CoreGraphicsFormatter<W> {
    out: W,
    precision: Option<usize>,
    error: Option<fmt::Error>,
}

impl<W: Write> CoreGraphicsFormatter<W> {
    /// Creates a formatter writing to `out` with the shortest float
    /// representation.
    pub fn new(out: W) -> Self {
        Self {
            out,
            precision: None,
            error: None,
        }
    }

    /// Sets the number of digits printed after the decimal point.
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = Some(precision);
        self
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    /// Returns the first error reported by the writer, if any.
    pub fn error(&self) -> Option<fmt::Error> {
        self.error
    }

    /// Consumes the formatter, returning the underlying writer or the first
    /// error it reported.
    pub fn into_inner(self) -> Result<W, fmt::Error> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(self.out),
        }
    }

    /// Runs `write` unless an earlier write already failed.
    fn emit(&mut self, write: impl FnOnce(&mut Self) -> fmt::Result) {
        if self.error.is_some() {
            return;
        }
        if let Err(error) = write(self) {
            log::warn!("CoreGraphics output failed, discarding the rest of the path");
            self.error = Some(error);
        }
    }

    fn statement(&mut self, function: &str, points: &[Point<f32>]) {
        self.emit(|this| this.write_statement(function, points));
    }

    fn write_statement(&mut self, function: &str, points: &[Point<f32>]) -> fmt::Result {
        write!(self.out, "\t\tc.{function} (")?;
        for (i, point) in points.iter().enumerate() {
            if i != 0 {
                self.out.write_str(", ")?;
            }
            let (x, y) = (point.x, point.y);
            match self.precision {
                Some(prec) => write!(self.out, "{x:.0$}f, {y:.0$}f", prec)?,
                None => write!(self.out, "{x}f, {y}f")?,
            }
        }
        self.out.write_str(");\n")
    }
}

impl<W: Write> PathFormatter for CoreGraphicsFormatter<W> {
    fn prologue(&mut self, name: &str) {
        self.emit(|this| write!(this.out, "\tstatic void {name} (CGContext c)\n\t{{\n"));
    }

    fn epilogue(&mut self) {
        self.emit(|this| {
            this.out
                .write_str("\t\tc.FillPath ();\n\t\tc.StrokePath ();\n\t}\n\n")
        });
    }

    fn move_to(&mut self, point: Point<f32>) {
        self.statement("MoveTo", &[point]);
    }

    fn line_to(&mut self, point: Point<f32>) {
        self.statement("AddLineToPoint", &[point]);
    }

    fn quad_curve_to(&mut self, control: Point<f32>, end: Point<f32>) {
        self.statement("AddQuadCurveToPoint", &[control, end]);
    }

    fn curve_to(&mut self, control1: Point<f32>, control2: Point<f32>, end: Point<f32>) {
        self.statement("AddCurveToPoint", &[control1, control2, end]);
    }

    fn close_path(&mut self) {
        self.statement("ClosePath", &[]);
    }
}
