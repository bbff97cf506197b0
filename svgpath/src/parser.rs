//! Parsing of SVG path data.
//!
//! See "8.3 Path data" at <https://www.w3.org/TR/SVG11/paths.html#PathData>

mod scanner;

use crate::{error::MalformedPathError, formatter::PathFormatter, FillRule, Point};
use scanner::Scanner;

/// Information about a successfully parsed path.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathSummary {
    /// Name that was passed to the formatter's prologue.
    pub name: String,
    /// Fill rule selected by the last `F` token, or the default.
    pub fill_rule: FillRule,
    /// Number of primitives sent to the formatter. An arc counts as one
    /// primitive regardless of how many curves it becomes.
    pub segments: usize,
}

/// Parses `path_data` and sends the resulting primitives to `formatter`.
///
/// The formatter receives a [`prologue`](PathFormatter::prologue) with
/// `name` first and, only if the entire string is valid, a closing
/// [`epilogue`](PathFormatter::epilogue). On error, primitives for the part
/// of the path preceding the error have already been sent.
pub fn parse<F: PathFormatter + ?Sized>(
    path_data: &str,
    name: &str,
    formatter: &mut F,
) -> Result<PathSummary, MalformedPathError> {
    formatter.prologue(name);
    let mut parser = Parser::new(path_data, formatter);
    parser.parse()?;
    let fill_rule = parser.state.fill_rule;
    let segments = parser.segments;
    formatter.epilogue();
    Ok(PathSummary {
        name: name.into(),
        fill_rule,
        segments,
    })
}

/// Most recent curve, used by the smooth curve commands.
#[derive(Copy, Clone, PartialEq, Default, Debug)]
pub enum LastCurve {
    /// The previous command was not a curve.
    #[default]
    None,
    /// A quadratic curve with this control point.
    Quad(Point<f32>),
    /// A cubic curve with this second control point.
    Cubic(Point<f32>),
}

/// Geometric state threaded through the commands of a single path.
#[derive(Copy, Clone, PartialEq, Default, Debug)]
pub struct ParserState {
    /// The last plotted point.
    pub current: Point<f32>,
    /// Point set by the most recent moveto, where closepath returns to.
    pub subpath_start: Point<f32>,
    pub last_curve: LastCurve,
    pub fill_rule: FillRule,
    /// True once a moveto has been seen.
    pub has_subpath: bool,
}

impl ParserState {
    /// Makes a point absolute, offsetting it by the current point for the
    /// relative forms of the commands.
    pub fn resolve(&self, point: Point<f32>, relative: bool) -> Point<f32> {
        if relative {
            point + self.current
        } else {
            point
        }
    }

    /// Implied control point of a smooth quadratic curve.
    pub fn quad_reflection(&self) -> Point<f32> {
        match self.last_curve {
            LastCurve::Quad(control) => control.reflect_through(self.current),
            _ => self.current,
        }
    }

    /// Implied first control point of a smooth cubic curve.
    pub fn cubic_reflection(&self) -> Point<f32> {
        match self.last_curve {
            LastCurve::Cubic(control2) => control2.reflect_through(self.current),
            _ => self.current,
        }
    }

    pub fn move_to(&mut self, point: Point<f32>) {
        self.current = point;
        self.subpath_start = point;
        self.last_curve = LastCurve::None;
        self.has_subpath = true;
    }

    /// Lines and arcs.
    pub fn line_to(&mut self, end: Point<f32>) {
        self.current = end;
        self.last_curve = LastCurve::None;
    }

    pub fn quad_to(&mut self, control: Point<f32>, end: Point<f32>) {
        self.current = end;
        self.last_curve = LastCurve::Quad(control);
    }

    pub fn curve_to(&mut self, control2: Point<f32>, end: Point<f32>) {
        self.current = end;
        self.last_curve = LastCurve::Cubic(control2);
    }

    pub fn close(&mut self) {
        self.current = self.subpath_start;
        self.last_curve = LastCurve::None;
    }
}

/// Path data command, without its absolute or relative mode.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
enum Command {
    MoveTo,
    LineTo,
    HorizontalLineTo,
    VerticalLineTo,
    QuadTo,
    SmoothQuadTo,
    CurveTo,
    SmoothCurveTo,
    ArcTo,
    ClosePath,
    FillRule,
}

impl Command {
    /// Returns the command and whether it is relative for the given letter.
    fn from_letter(letter: u8) -> Option<(Self, bool)> {
        use Command::*;
        let command = match letter.to_ascii_uppercase() {
            b'M' => MoveTo,
            b'L' => LineTo,
            b'H' => HorizontalLineTo,
            b'V' => VerticalLineTo,
            b'Q' => QuadTo,
            b'T' => SmoothQuadTo,
            b'C' => CurveTo,
            b'S' => SmoothCurveTo,
            b'A' => ArcTo,
            b'Z' => ClosePath,
            b'F' => FillRule,
            _ => return None,
        };
        Some((command, letter.is_ascii_lowercase()))
    }
}

/// Transient state for parsing a single path.
struct Parser<'a, F: ?Sized> {
    scanner: Scanner<'a>,
    formatter: &'a mut F,
    state: ParserState,
    segments: usize,
    /// Mode of the last closepath while bare numbers may follow it.
    after_close: Option<bool>,
}

impl<'a, F> Parser<'a, F>
where
    F: PathFormatter + ?Sized,
{
    fn new(path_data: &'a str, formatter: &'a mut F) -> Self {
        Self {
            scanner: Scanner::new(path_data),
            formatter,
            state: ParserState::default(),
            segments: 0,
            after_close: None,
        }
    }

    fn parse(&mut self) -> Result<(), MalformedPathError> {
        loop {
            self.scanner.skip_whitespace();
            let Some(byte) = self.scanner.peek() else {
                break;
            };
            let position = self.scanner.position();
            let (command, relative, letter) = if let Some((command, relative)) =
                Command::from_letter(byte)
            {
                self.scanner.advance();
                (command, relative, byte)
            } else if let (Some(relative), true) = (self.after_close, self.scanner.has_number()) {
                // Coordinates after a closepath continue as lines from the
                // start of the subpath.
                let letter = if relative { b'l' } else { b'L' };
                (Command::LineTo, relative, letter)
            } else {
                return Err(MalformedPathError::UnknownCommand {
                    command: self.scanner.char_at(position),
                    position,
                });
            };
            if !self.state.has_subpath && !matches!(command, Command::MoveTo | Command::FillRule) {
                return Err(MalformedPathError::MissingMoveTo {
                    command: letter as char,
                    position,
                });
            }
            log::trace!("command '{}' at offset {position}", letter as char);
            if command != Command::FillRule {
                self.after_close = None;
            }
            self.evaluate_command(command, relative, letter)?;
        }
        Ok(())
    }

    /// Evaluates a command along with all of its repeated argument groups.
    fn evaluate_command(
        &mut self,
        mut command: Command,
        relative: bool,
        letter: u8,
    ) -> Result<(), MalformedPathError> {
        use Command::*;
        loop {
            match command {
                FillRule => {
                    self.scanner.skip_whitespace();
                    let position = self.scanner.position();
                    let digit = self.scanner.peek();
                    let fill_rule = digit.and_then(crate::FillRule::from_digit).ok_or_else(|| {
                        MalformedPathError::InvalidFillRule {
                            digit: digit.map(|_| self.scanner.char_at(position)),
                            position,
                        }
                    })?;
                    self.scanner.advance();
                    log::debug!("fill rule set to {fill_rule:?}");
                    self.state.fill_rule = fill_rule;
                    return Ok(());
                }
                ClosePath => {
                    self.formatter.close_path();
                    // Reopen at the start so that following lines begin there
                    self.formatter.move_to(self.state.subpath_start);
                    self.segments += 2;
                    self.state.close();
                    self.after_close = Some(relative);
                    return Ok(());
                }
                MoveTo => {
                    let point = self.read_point(letter, relative)?;
                    self.move_to(point);
                    // Further pairs are implicit lines in the same mode
                    command = LineTo;
                }
                LineTo => {
                    let point = self.read_point(letter, relative)?;
                    self.line_to(point);
                }
                HorizontalLineTo => {
                    let mut x = self.scanner.read_number(letter)?;
                    if relative {
                        x += self.state.current.x;
                    }
                    self.line_to(Point::new(x, self.state.current.y));
                }
                VerticalLineTo => {
                    let mut y = self.scanner.read_number(letter)?;
                    if relative {
                        y += self.state.current.y;
                    }
                    self.line_to(Point::new(self.state.current.x, y));
                }
                QuadTo => {
                    let control = self.read_point(letter, relative)?;
                    let end = self.read_point(letter, relative)?;
                    self.quad_to(control, end);
                }
                SmoothQuadTo => {
                    let control = self.state.quad_reflection();
                    let end = self.read_point(letter, relative)?;
                    self.quad_to(control, end);
                }
                CurveTo => {
                    let control1 = self.read_point(letter, relative)?;
                    let control2 = self.read_point(letter, relative)?;
                    let end = self.read_point(letter, relative)?;
                    self.curve_to(control1, control2, end);
                }
                SmoothCurveTo => {
                    let control1 = self.state.cubic_reflection();
                    let control2 = self.read_point(letter, relative)?;
                    let end = self.read_point(letter, relative)?;
                    self.curve_to(control1, control2, end);
                }
                ArcTo => {
                    // Radii and rotation are never relative
                    let radii = self.scanner.read_point(letter)?;
                    let x_axis_rotation = self.scanner.read_number(letter)?;
                    let large_arc = self.scanner.read_flag(letter)?;
                    let sweep = self.scanner.read_flag(letter)?;
                    let end = self.read_point(letter, relative)?;
                    let start = self.state.current;
                    self.formatter
                        .arc_to(radii, x_axis_rotation, large_arc, sweep, end, start);
                    self.segments += 1;
                    self.state.line_to(end);
                }
            }
            if !self.scanner.has_number() {
                return Ok(());
            }
        }
    }

    fn read_point(&mut self, letter: u8, relative: bool) -> Result<Point<f32>, MalformedPathError> {
        let point = self.scanner.read_point(letter)?;
        Ok(self.state.resolve(point, relative))
    }

    fn move_to(&mut self, point: Point<f32>) {
        self.formatter.move_to(point);
        self.segments += 1;
        self.state.move_to(point);
    }

    fn line_to(&mut self, end: Point<f32>) {
        self.formatter.line_to(end);
        self.segments += 1;
        self.state.line_to(end);
    }

    fn quad_to(&mut self, control: Point<f32>, end: Point<f32>) {
        self.formatter.quad_curve_to(control, end);
        self.segments += 1;
        self.state.quad_to(control, end);
    }

    fn curve_to(&mut self, control1: Point<f32>, control2: Point<f32>, end: Point<f32>) {
        self.formatter.curve_to(control1, control2, end);
        self.segments += 1;
        self.state.curve_to(control2, end);
    }
}
