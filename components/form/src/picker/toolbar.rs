//! The header shown above a picker's view.

use core::{any::type_name, fmt};

use alloc::{rc::Rc, string::String, vec::Vec};
use waterpick_core::DateAdapter;

use super::props::{Orientation, PickerView};

/// Shown in place of the value while the picker is empty.
pub const TOOLBAR_PLACEHOLDER: &str = "–";

/// Everything a toolbar is told about the picker it heads.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolbarProps<D> {
    /// Caller-provided title. `None` lets the toolbar pick its own.
    pub title: Option<String>,
    /// The current date, when valid.
    pub date: Option<D>,
    /// Views the picker can show.
    pub views: Vec<PickerView>,
    /// View shown first.
    pub open_to: Option<PickerView>,
    /// Layout orientation.
    pub orientation: Orientation,
    /// Whether the value breaks a validation rule.
    pub error: bool,
    /// Resolved input format.
    pub input_format: String,
}

/// A rendered toolbar.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ToolbarContent {
    /// Small caption, for example `SELECT DATE`.
    pub title: String,
    /// The current value, or [`TOOLBAR_PLACEHOLDER`].
    pub text: String,
    /// Lay out beside the view instead of above it.
    pub landscape: bool,
    /// Draw in the error style.
    pub error: bool,
}

impl ToolbarContent {
    /// Builds the content most toolbars show: a title and the value formatted
    /// with `format`.
    #[must_use]
    pub fn formatted<A: DateAdapter>(
        adapter: &A,
        props: &ToolbarProps<A::Date>,
        default_title: &str,
        format: &str,
    ) -> Self {
        Self {
            title: props
                .title
                .clone()
                .unwrap_or_else(|| default_title.into()),
            text: props
                .date
                .as_ref()
                .map_or_else(|| TOOLBAR_PLACEHOLDER.into(), |date| adapter.format(date, format)),
            landscape: props.orientation == Orientation::Landscape,
            error: props.error,
        }
    }
}

/// A toolbar renderer. Compared by identity.
pub struct Toolbar<A: DateAdapter>(Rc<dyn Fn(&ToolbarProps<A::Date>, &A) -> ToolbarContent>);

impl<A: DateAdapter> Toolbar<A> {
    /// Wraps a render function.
    pub fn new(render: impl Fn(&ToolbarProps<A::Date>, &A) -> ToolbarContent + 'static) -> Self {
        Self(Rc::new(render))
    }

    /// Renders the toolbar.
    #[must_use]
    pub fn render(&self, props: &ToolbarProps<A::Date>, adapter: &A) -> ToolbarContent {
        (self.0)(props, adapter)
    }
}

impl<A: DateAdapter> Clone for Toolbar<A> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<A: DateAdapter> PartialEq for Toolbar<A> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<A: DateAdapter> fmt::Debug for Toolbar<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(type_name::<Self>())
    }
}

#[cfg(test)]
mod tests {
    use waterpick_time::{
        TimeAdapter,
        time::{Date, Month, PrimitiveDateTime},
    };

    use super::{TOOLBAR_PLACEHOLDER, Toolbar, ToolbarContent, ToolbarProps};
    use crate::picker::props::{Orientation, PickerView};

    fn props(date: Option<PrimitiveDateTime>) -> ToolbarProps<PrimitiveDateTime> {
        ToolbarProps {
            title: None,
            date,
            views: vec![PickerView::Day],
            open_to: Some(PickerView::Day),
            orientation: Orientation::Portrait,
            error: false,
            input_format: "MM/DD/YYYY".into(),
        }
    }

    #[test]
    fn empty_value_shows_placeholder() {
        let content =
            ToolbarContent::formatted(&TimeAdapter::new(), &props(None), "SELECT DATE", "YYYY");
        assert_eq!(content.title, "SELECT DATE");
        assert_eq!(content.text, TOOLBAR_PLACEHOLDER);
    }

    #[test]
    fn caller_title_and_landscape() {
        let date = Date::from_calendar_date(2021, Month::January, 5)
            .unwrap()
            .midnight();
        let mut props = props(Some(date));
        props.title = Some("Birthday".into());
        props.orientation = Orientation::Landscape;

        let content =
            ToolbarContent::formatted(&TimeAdapter::new(), &props, "SELECT DATE", "MMM D, YYYY");
        assert_eq!(content.title, "Birthday");
        assert_eq!(content.text, "Jan 5, 2021");
        assert!(content.landscape);
    }

    #[test]
    fn toolbars_compare_by_identity() {
        let render = |_: &ToolbarProps<_>, _: &TimeAdapter| ToolbarContent {
            title: String::new(),
            text: String::new(),
            landscape: false,
            error: false,
        };
        let a = Toolbar::<TimeAdapter>::new(render);
        let b = Toolbar::<TimeAdapter>::new(render);
        assert_eq!(a, a.clone());
        assert_ne!(a, b);
    }
}
