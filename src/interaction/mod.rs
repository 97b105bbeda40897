use std::sync::Arc;

use crate::core::Sample;

/// Builds the tooltip text for a hovered sample.
pub type TooltipFormatter = Arc<dyn Fn(Sample) -> String + Send + Sync + 'static>;

/// Default tooltip: the sample value verbatim as billions of dollars (`$909B`).
#[must_use]
pub fn currency_billions_tooltip(sample: Sample) -> String {
    format!("${}B", sample.y)
}

#[must_use]
pub fn default_tooltip_formatter() -> TooltipFormatter {
    Arc::new(currency_billions_tooltip)
}

/// Outcome of one pointer event for the host's tooltip widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TooltipUpdate {
    /// Displayed text stays as it is.
    Unchanged,
    /// Host must show this text; empty means hide the tooltip.
    Changed(String),
}

/// Hover state carried between pointer events.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HoverState {
    hovered: Option<usize>,
    tooltip: String,
}

impl HoverState {
    #[must_use]
    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    #[must_use]
    pub fn tooltip(&self) -> &str {
        &self.tooltip
    }

    /// Records the latest hit and reports whether the visible text changed.
    pub fn update(&mut self, hovered: Option<usize>, tooltip: String) -> TooltipUpdate {
        self.hovered = hovered;
        if self.tooltip == tooltip {
            return TooltipUpdate::Unchanged;
        }
        self.tooltip.clone_from(&tooltip);
        TooltipUpdate::Changed(tooltip)
    }

    pub fn clear(&mut self) -> TooltipUpdate {
        self.update(None, String::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tooltip_keeps_value_digits_verbatim() {
        assert_eq!(currency_billions_tooltip(Sample::new(1980.0, 909.0)), "$909B");
        assert_eq!(currency_billions_tooltip(Sample::new(1910.0, 2.65)), "$2.65B");
        assert_eq!(currency_billions_tooltip(Sample::new(1990.0, 3_206.0)), "$3206B");
    }

    #[test]
    fn repeated_text_is_not_reported_twice() {
        let mut hover = HoverState::default();
        assert_eq!(
            hover.update(Some(3), "$1B".to_owned()),
            TooltipUpdate::Changed("$1B".to_owned())
        );
        assert_eq!(hover.update(Some(3), "$1B".to_owned()), TooltipUpdate::Unchanged);
        assert_eq!(hover.clear(), TooltipUpdate::Changed(String::new()));
        assert_eq!(hover.clear(), TooltipUpdate::Unchanged);
    }
}
