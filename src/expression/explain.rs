use crate::expression::ast::{Expression, Shape};

/// Lazy step-by-step derivation of an [`Expression`]
///
/// Yields an optional summary line, then one line per node in post-order, so
/// every intermediate value is explained before it is used.
#[derive(Debug, Clone)]
pub struct Explain<'a> {
    header: Option<String>,
    stack: Vec<(&'a Expression, bool)>,
}

impl<'a> Iterator for Explain<'a> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(header) = self.header.take() {
            return Some(header);
        }

        while let Some((expr, expanded)) = self.stack.pop() {
            let Shape::Node { left, op, right } = expr.shape() else {
                continue;
            };
            if expanded {
                return Some(format!(
                    "{} {} {} = {}",
                    left.value(),
                    op,
                    right.value(),
                    expr.value()
                ));
            }
            self.stack.push((expr, true));
            self.stack.push((right.as_ref(), false));
            self.stack.push((left.as_ref(), false));
        }
        None
    }
}

impl Expression {
    /// Explain how the value is computed, one operation per line
    ///
    /// With `header` set, the first line summarises the value and step count.
    /// Calling this again restarts the explanation from the beginning.
    pub fn explain(&self, header: bool) -> Explain<'_> {
        let header = header.then(|| {
            format!(
                "{} can be computed in {} steps:",
                self.value(),
                self.steps()
            )
        });
        Explain {
            header,
            stack: vec![(self, false)],
        }
    }
}
