//! Joins a variant configuration and a wrapper into a picker component.
//!
//! A [`PickerComponent`] is built once per variant and wrapper. It is cheap to
//! clone and holds no per-picker state. Each mounted picker is a
//! [`PickerInstance`], which owns the open state, remembers the last
//! validation outcome, and writes its input element into a
//! [`ForwardedRef`].
//!
//! Every render cycle runs the same steps in the same order:
//!
//! 1. registered default props for the variant name are merged under the
//!    caller's props,
//! 2. the date adapter is resolved (props, then environment, then default),
//! 3. the variant's interceptor resolves the input format and variant
//!    defaults,
//! 4. the bound raw input is parsed by the shared [`ValueManager`],
//! 5. the variant's validation runs once on the parsed value,
//! 6. the three prop bundles are composed and handed to the wrapper.

use core::fmt;

use alloc::{rc::Rc, string::String};
use tracing::{debug, trace};
use waterpick_core::{
    ConfigError, DateAdapter, DefaultPropsRegistry, Environment, ForwardedRef,
    adapter::resolve_adapter,
};
use waterpick_layout::{InputKind, OpenState, Wrapped, Wrapper, WrapperEvent, WrapperVariant};

use super::{
    options::{InterceptedProps, PickerOptions, VariantConfig},
    props::{
        MergedProps, PickerDefaults, PickerHandlers, PickerProps, ValidationChange, ValueChange,
        VariantProps,
    },
    state::{DateInputProps, PickerState, PickerViewProps, compose_picker_state},
    value::{PickerValue, VALUE_MANAGER, ValueManager},
};
use crate::validation::ValidationError;

/// What a picker hands to its backend after each cycle.
pub type PickerFrame<D, V> = Wrapped<DateInputProps, PickerViewProps<D, V>>;

/// Builds a picker component from a wrapper and a variant configuration.
///
/// Calling it twice with equal arguments gives two independent components
/// that behave the same.
///
/// # Errors
///
/// Returns a [`ConfigError`] when `options` is missing its name, validation,
/// interceptor or default toolbar.
pub fn make_picker_with_state_and_wrapper<A, V, W>(
    wrapper: W,
    options: PickerOptions<A, V>,
) -> Result<PickerComponent<A, V, W>, ConfigError>
where
    A: DateAdapter,
    V: VariantProps,
    W: Wrapper,
{
    let config = options.resolve()?;
    debug!(picker = %config.name, ?wrapper, "built picker component");
    Ok(PickerComponent {
        inner: Rc::new(ComponentInner {
            config,
            wrapper,
            value_manager: &VALUE_MANAGER,
        }),
    })
}

struct ComponentInner<A: DateAdapter, V, W> {
    config: VariantConfig<A, V>,
    wrapper: W,
    value_manager: &'static dyn ValueManager<A>,
}

/// A picker variant rendered through one wrapper.
pub struct PickerComponent<A: DateAdapter, V, W> {
    inner: Rc<ComponentInner<A, V, W>>,
}

/// The outcome of one render cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct PickerCycle<A: DateAdapter, V, P> {
    /// Props after default injection and interception.
    pub merged: MergedProps<A, V>,
    /// The parsed value.
    pub value: PickerValue<A::Date>,
    /// The validation outcome.
    pub validation: Option<ValidationError>,
    /// The composed bundles.
    pub state: PickerState<A::Date, V, P>,
}

impl<A, V, W> PickerComponent<A, V, W>
where
    A: DateAdapter,
    V: VariantProps,
    W: Wrapper,
{
    /// Registry name of the variant.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.inner.config.name
    }

    /// The wrapper strategy.
    #[must_use]
    pub fn wrapper(&self) -> &W {
        &self.inner.wrapper
    }

    /// The value manager shared by every picker.
    #[must_use]
    pub fn value_manager(&self) -> &'static dyn ValueManager<A> {
        self.inner.value_manager
    }

    /// Runs one render cycle without touching any picker state.
    #[must_use]
    pub fn evaluate(
        &self,
        props: &PickerProps<A, V, W::Props>,
        env: &Environment,
    ) -> PickerCycle<A, V, W::Props> {
        let config = &self.inner.config;

        let caller = PickerDefaults {
            common: props.common.clone(),
            variant: props.variant.clone(),
        };
        let PickerDefaults { common, variant } = match env.get::<DefaultPropsRegistry>() {
            Some(registry) => registry.apply(&config.name, caller),
            None => caller,
        };

        let adapter = resolve_adapter(props.date_adapter.clone(), env);
        let InterceptedProps {
            common,
            variant,
            input_format,
        } = (config.intercept_props)(&adapter, common, variant);
        let toolbar = common
            .toolbar
            .clone()
            .unwrap_or_else(|| config.default_toolbar.clone());
        let merged = MergedProps {
            common,
            variant,
            input_format,
            toolbar,
            adapter,
        };

        let value = self
            .inner
            .value_manager
            .parse_input(&merged.adapter, &props.value.get());
        let validation = (config.validation)(&value, &merged);
        let state = compose_picker_state(&merged, &props.wrapper, &value, validation.as_ref());
        trace!(picker = %config.name, ?value, ?validation, "evaluated picker");

        PickerCycle {
            merged,
            value,
            validation,
            state,
        }
    }

    /// Mounts a picker that writes its input element into `input_ref`.
    #[must_use]
    pub fn mount(&self, input_ref: ForwardedRef<InputElement>) -> PickerInstance<A, V, W> {
        PickerInstance {
            component: self.clone(),
            input_ref,
            open: OpenState::Closed,
            last_validation: None,
        }
    }
}

impl<A: DateAdapter, V, W> Clone for PickerComponent<A, V, W> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<A: DateAdapter, V, W: fmt::Debug> fmt::Debug for PickerComponent<A, V, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PickerComponent")
            .field("name", &self.inner.config.name)
            .field("wrapper", &self.inner.wrapper)
            .finish_non_exhaustive()
    }
}

/// Whether a selection in the view is complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectionState {
    /// More views follow, for example hours after the day.
    Partial,
    /// The last view was used.
    Finish,
}

/// Something the user did to a mounted picker.
#[derive(Debug, Clone, PartialEq)]
pub enum PickerEvent<D> {
    /// Focus or click on the input.
    Open,
    /// The input text changed.
    InputChanged(String),
    /// A date was picked in the view.
    Select {
        /// The picked date.
        date: D,
        /// Whether the selection is complete.
        state: SelectionState,
    },
    /// The accept button.
    Accept,
    /// The cancel button.
    Dismiss,
    /// A click or tap outside the chrome.
    OutsideInteraction,
    /// The clear button.
    Clear,
    /// The today button.
    SetToday,
}

/// The interactive input a mounted picker exposes through its forwarded
/// reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputElement {
    /// Element identifier.
    pub id: Option<String>,
    /// Editable or read-only.
    pub kind: InputKind,
    /// Displayed text.
    pub value: String,
    /// Whether typing changes the value.
    pub editable: bool,
    /// Error style.
    pub error: bool,
}

/// A mounted picker.
pub struct PickerInstance<A: DateAdapter, V, W> {
    component: PickerComponent<A, V, W>,
    input_ref: ForwardedRef<InputElement>,
    open: OpenState,
    last_validation: Option<ValidationError>,
}

impl<A, V, W> PickerInstance<A, V, W>
where
    A: DateAdapter,
    V: VariantProps,
    W: Wrapper,
{
    /// The component this picker was mounted from.
    #[must_use]
    pub const fn component(&self) -> &PickerComponent<A, V, W> {
        &self.component
    }

    /// The open state owned by the picker. A controlled `open` prop takes
    /// precedence when rendering.
    #[must_use]
    pub const fn open_state(&self) -> OpenState {
        self.open
    }

    /// Runs a render cycle and wraps the result.
    pub fn render(
        &mut self,
        props: &PickerProps<A, V, W::Props>,
        env: &Environment,
    ) -> PickerFrame<A::Date, V> {
        let cycle = self.component.evaluate(props, env);
        self.notify_validation(&props.handlers, &cycle);

        let wrapper = self.component.wrapper();
        let variant = wrapper.variant(env);
        let open = self.effective_open(&cycle.merged);
        self.attach_input(variant, &cycle.state.input_props);

        let PickerState {
            picker_props,
            input_props,
            wrapper_props,
        } = cycle.state;
        wrapper.wrap(open, &wrapper_props, input_props, picker_props, env)
    }

    /// Handles `event`, then renders.
    pub fn dispatch(
        &mut self,
        props: &PickerProps<A, V, W::Props>,
        event: PickerEvent<A::Date>,
        env: &Environment,
    ) -> PickerFrame<A::Date, V> {
        let cycle = self.component.evaluate(props, env);
        let variant = self.component.wrapper().variant(env);
        trace!(picker = %self.component.name(), ?event, "picker event");

        match event {
            PickerEvent::Open => {
                self.transition(props, &cycle.merged, WrapperEvent::OpenRequested, variant);
            }
            PickerEvent::InputChanged(text) => {
                let next = read_keyboard_input(&cycle.merged, &text);
                self.commit(props, &cycle, next, Some(text));
            }
            PickerEvent::Select { date, state } => {
                self.commit(props, &cycle, PickerValue::Valid(date), None);
                let keep_open = cycle
                    .merged
                    .common
                    .disable_close_on_select
                    .unwrap_or(!variant.closes_on_select());
                if state == SelectionState::Finish && !keep_open {
                    self.accept(props, &cycle, variant);
                }
            }
            PickerEvent::Accept => self.accept(props, &cycle, variant),
            PickerEvent::Dismiss => {
                self.transition(props, &cycle.merged, WrapperEvent::Dismissed, variant);
            }
            PickerEvent::OutsideInteraction => {
                self.transition(
                    props,
                    &cycle.merged,
                    WrapperEvent::OutsideInteraction,
                    variant,
                );
            }
            PickerEvent::Clear => {
                let empty = self.component.value_manager().empty_value();
                self.commit(props, &cycle, empty, None);
                self.accept(props, &cycle, variant);
            }
            PickerEvent::SetToday => {
                let today = cycle.merged.adapter.now();
                self.commit(props, &cycle, PickerValue::Valid(today), None);
                self.accept(props, &cycle, variant);
            }
        }

        self.render(props, env)
    }

    fn effective_open(&self, merged: &MergedProps<A, V>) -> OpenState {
        merged.common.open.map_or(self.open, OpenState::from)
    }

    fn commit(
        &self,
        props: &PickerProps<A, V, W::Props>,
        cycle: &PickerCycle<A, V, W::Props>,
        next: PickerValue<A::Date>,
        keyboard_input: Option<String>,
    ) {
        let merged = &cycle.merged;
        if merged.is_disabled() || merged.is_read_only() {
            trace!(picker = %self.component.name(), "picker is not editable");
            return;
        }
        let manager = self.component.value_manager();
        // Store only what the next cycle will read back from the binding.
        let next = manager.parse_input(&merged.adapter, &next.into_raw());
        if manager.are_values_equal(&merged.adapter, &cycle.value, &next) {
            debug!(picker = %self.component.name(), "value unchanged, change suppressed");
            return;
        }

        props.value.set(next.clone().into_raw());
        if let Some(on_change) = &props.handlers.on_change {
            on_change.call(&ValueChange {
                value: next,
                keyboard_input,
            });
        }
    }

    fn accept(
        &mut self,
        props: &PickerProps<A, V, W::Props>,
        cycle: &PickerCycle<A, V, W::Props>,
        variant: WrapperVariant,
    ) {
        let value = self
            .component
            .value_manager()
            .parse_input(&cycle.merged.adapter, &props.value.get());
        if let Some(on_accept) = &props.handlers.on_accept {
            on_accept.call(&value);
        }
        self.transition(props, &cycle.merged, WrapperEvent::Committed, variant);
    }

    fn transition(
        &mut self,
        props: &PickerProps<A, V, W::Props>,
        merged: &MergedProps<A, V>,
        event: WrapperEvent,
        variant: WrapperVariant,
    ) {
        if event == WrapperEvent::OpenRequested && (merged.is_disabled() || merged.is_read_only())
        {
            trace!(picker = %self.component.name(), "open request ignored");
            return;
        }

        let current = self.effective_open(merged);
        let next = current.transition(event, variant);
        if next == current {
            return;
        }
        if merged.common.open.is_none() {
            self.open = next;
        }

        let callback = if next.is_open() {
            &props.handlers.on_open
        } else {
            &props.handlers.on_close
        };
        if let Some(callback) = callback {
            callback.call(&());
        }
    }

    fn notify_validation(
        &mut self,
        handlers: &PickerHandlers<A::Date>,
        cycle: &PickerCycle<A, V, W::Props>,
    ) {
        if self.last_validation == cycle.validation {
            return;
        }
        self.last_validation = cycle.validation;
        if let Some(on_error) = &handlers.on_error {
            on_error.call(&ValidationChange {
                error: cycle.validation,
                value: cycle.value.clone(),
            });
        }
    }

    fn attach_input(&self, variant: WrapperVariant, input: &DateInputProps) {
        match variant.input_kind() {
            Some(kind) => self.input_ref.set(InputElement {
                id: input.id.clone(),
                kind,
                value: input.display_value.clone(),
                editable: kind == InputKind::Keyboard && !input.disabled && !input.read_only,
                error: input.error,
            }),
            None => self.input_ref.clear(),
        }
    }
}

impl<A: DateAdapter, V, W: fmt::Debug> fmt::Debug for PickerInstance<A, V, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PickerInstance")
            .field("component", &self.component)
            .field("open", &self.open)
            .field("last_validation", &self.last_validation)
            .finish_non_exhaustive()
    }
}

fn read_keyboard_input<A: DateAdapter, V>(
    merged: &MergedProps<A, V>,
    text: &str,
) -> PickerValue<A::Date> {
    if text.trim().is_empty() {
        return PickerValue::Empty;
    }
    merged
        .adapter
        .parse(text.trim(), &merged.input_format)
        .map_or_else(|| PickerValue::Invalid(text.into()), PickerValue::Valid)
}

#[cfg(test)]
mod tests {
    use core::cell::{Cell, RefCell};

    use alloc::{rc::Rc, vec::Vec};
    use nami::{Binding, binding};
    use waterpick_core::{ConfigError, DefaultPropsRegistry, Environment, ForwardedRef};
    use waterpick_layout::{
        DesktopWrapper, InlineWrapper, InputKind, MobileWrapper, OpenState, PointerCapability,
        ResponsiveWrapper, StaticWrapper, Wrapper, WrapperVariant,
    };
    use waterpick_time::{
        TimeAdapter,
        time::{Date, Month, PrimitiveDateTime},
    };

    use super::{PickerEvent, SelectionState, make_picker_with_state_and_wrapper};
    use crate::{
        picker::{
            date::{DatePickerProps, date_toolbar},
            options::{InterceptedProps, PickerOptions},
            props::{CommonProps, PickerDefaults, PickerProps},
            value::{PickerValue, RawInput},
        },
        validation::{ValidationError, validate_date},
    };

    type Props = DatePickerProps<PrimitiveDateTime>;

    fn day(year: i32, month: Month, day: u8) -> PrimitiveDateTime {
        Date::from_calendar_date(year, month, day)
            .unwrap()
            .midnight()
    }

    fn iso_options() -> PickerOptions<TimeAdapter, Props> {
        PickerOptions::<TimeAdapter, Props>::new("IsoDatePicker")
            .validation(|value, props| {
                validate_date(&props.adapter, value, &props.variant.rules())
            })
            .intercept_props(|_, common, variant| InterceptedProps {
                common,
                variant,
                input_format: "YYYY-MM-DD".into(),
            })
            .default_toolbar(date_toolbar())
    }

    fn january() -> Props {
        DatePickerProps {
            min_date: Some(day(2021, Month::January, 1)),
            max_date: Some(day(2021, Month::January, 31)),
            ..DatePickerProps::default()
        }
    }

    fn value(raw: RawInput<PrimitiveDateTime>) -> Binding<RawInput<PrimitiveDateTime>> {
        binding(raw)
    }

    fn props_for<P: Default>(
        source: &Binding<RawInput<PrimitiveDateTime>>,
    ) -> PickerProps<TimeAdapter, Props, P> {
        PickerProps::new(source)
    }

    fn recorder<T: Clone + 'static>() -> (Rc<RefCell<Vec<T>>>, impl Fn(&T) + 'static) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = {
            let seen = Rc::clone(&seen);
            move |item: &T| seen.borrow_mut().push(item.clone())
        };
        (seen, sink)
    }

    #[test]
    fn building_without_validation_fails() {
        let options = PickerOptions::<TimeAdapter, Props>::new("Broken")
            .intercept_props(|_, common, variant| InterceptedProps {
                common,
                variant,
                input_format: String::new(),
            })
            .default_toolbar(date_toolbar());
        let error = make_picker_with_state_and_wrapper(DesktopWrapper, options).unwrap_err();
        assert_eq!(
            error,
            ConfigError::MissingValidation {
                name: "Broken".into()
            }
        );
    }

    #[test]
    fn empty_value_renders_blank_without_error() {
        let picker = make_picker_with_state_and_wrapper(DesktopWrapper, iso_options()).unwrap();
        let props = props_for(&value(RawInput::Empty));
        let cycle = picker.evaluate(&props, &Environment::new());

        assert_eq!(cycle.merged.input_format, "YYYY-MM-DD");
        assert_eq!(cycle.value, PickerValue::Empty);
        assert!(!cycle.state.input_props.error);
        assert_eq!(cycle.state.input_props.display_value, "");
    }

    #[test]
    fn out_of_range_value_flags_both_bundles() {
        let picker = make_picker_with_state_and_wrapper(DesktopWrapper, iso_options()).unwrap();
        let props = props_for(&value(RawInput::Value(day(2021, Month::March, 1))))
            .variant(january());
        let cycle = picker.evaluate(&props, &Environment::new());

        assert_eq!(cycle.validation, Some(ValidationError::MaxDate));
        assert!(cycle.state.input_props.error);
        assert!(cycle.state.picker_props.error);
        assert!(
            cycle
                .state
                .picker_props
                .toolbar
                .is_some_and(|toolbar| toolbar.error)
        );
    }

    #[test]
    fn identical_keyboard_input_is_reported_once() {
        let picker = make_picker_with_state_and_wrapper(DesktopWrapper, iso_options()).unwrap();
        let (changes, on_change) = recorder();
        let source = value(RawInput::Empty);
        let props = props_for(&source).on_change(on_change);
        let env = Environment::new();
        let mut instance = picker.mount(ForwardedRef::new());

        instance.dispatch(&props, PickerEvent::InputChanged("2021-01-05".into()), &env);
        instance.dispatch(&props, PickerEvent::InputChanged("2021-01-05".into()), &env);

        assert_eq!(changes.borrow().len(), 1);
        assert_eq!(
            changes.borrow()[0].value,
            PickerValue::Valid(day(2021, Month::January, 5))
        );
        assert_eq!(
            changes.borrow()[0].keyboard_input.as_deref(),
            Some("2021-01-05")
        );
        assert_eq!(source.get(), RawInput::Value(day(2021, Month::January, 5)));
    }

    #[test]
    fn unreadable_keyboard_input_is_kept_and_flagged() {
        let picker = make_picker_with_state_and_wrapper(InlineWrapper, iso_options()).unwrap();
        let source = value(RawInput::Empty);
        let props = props_for(&source);
        let mut instance = picker.mount(ForwardedRef::new());

        let frame = instance.dispatch(
            &props,
            PickerEvent::InputChanged("2021-1".into()),
            &Environment::new(),
        );
        let input = frame.input.unwrap().props;
        assert_eq!(input.display_value, "2021-1");
        assert!(input.error);
        assert_eq!(input.validation_error, Some(ValidationError::InvalidDate));
    }

    #[test]
    fn wrapper_choice_only_changes_wrapper_props() {
        let source = value(RawInput::Value(day(2021, Month::January, 5)));
        let env = Environment::new();

        let desktop = make_picker_with_state_and_wrapper(DesktopWrapper, iso_options()).unwrap();
        let mobile = make_picker_with_state_and_wrapper(MobileWrapper, iso_options()).unwrap();
        let fixed = make_picker_with_state_and_wrapper(StaticWrapper, iso_options()).unwrap();

        let on_desktop = desktop
            .evaluate(&props_for(&source).variant(january()), &env)
            .state;
        let on_mobile = mobile
            .evaluate(&props_for(&source).variant(january()), &env)
            .state;
        let on_static = fixed
            .evaluate(&props_for(&source).variant(january()), &env)
            .state;

        assert_eq!(on_desktop.input_props, on_mobile.input_props);
        assert_eq!(on_desktop.input_props, on_static.input_props);
        assert_eq!(on_desktop.picker_props, on_mobile.picker_props);
        assert_eq!(on_desktop.picker_props, on_static.picker_props);
    }

    #[test]
    fn building_twice_gives_independent_equivalent_components() {
        let first = make_picker_with_state_and_wrapper(DesktopWrapper, iso_options()).unwrap();
        let second = make_picker_with_state_and_wrapper(DesktopWrapper, iso_options()).unwrap();
        let source = value(RawInput::Text("2021-01-05".into()));
        let env = Environment::new();

        let a = first.evaluate(&props_for(&source), &env);
        let b = second.evaluate(&props_for(&source), &env);
        assert_eq!(first.name(), second.name());
        assert_eq!(a.state.input_props, b.state.input_props);
        assert_eq!(a.value, b.value);

        let mut one = first.mount(ForwardedRef::new());
        let two = second.mount(ForwardedRef::new());
        one.dispatch(&props_for(&value(RawInput::Empty)), PickerEvent::Open, &env);
        assert!(one.open_state().is_open());
        assert!(!two.open_state().is_open());
    }

    #[test]
    fn registered_defaults_fill_unset_props() {
        let registry = DefaultPropsRegistry::new().with(
            "IsoDatePicker",
            PickerDefaults::<TimeAdapter, Props> {
                common: CommonProps {
                    label: Some("Registered".into()),
                    read_only: Some(true),
                    ..CommonProps::default()
                },
                variant: january(),
            },
        );
        let env = Environment::new().with(registry);
        let picker = make_picker_with_state_and_wrapper(DesktopWrapper, iso_options()).unwrap();
        let source = value(RawInput::Value(day(2021, Month::March, 1)));

        let cycle = picker.evaluate(&props_for(&source), &env);
        assert_eq!(cycle.state.input_props.label.as_deref(), Some("Registered"));
        assert!(cycle.state.input_props.read_only);
        assert_eq!(cycle.validation, Some(ValidationError::MaxDate));

        let cycle = picker.evaluate(&props_for(&source).label("Caller"), &env);
        assert_eq!(cycle.state.input_props.label.as_deref(), Some("Caller"));
    }

    #[test]
    fn adapter_prop_wins_over_environment() {
        let env = Environment::new().with(TimeAdapter::with_fixed_now(day(2000, Month::May, 5)));
        let picker = make_picker_with_state_and_wrapper(DesktopWrapper, iso_options()).unwrap();
        let source = value(RawInput::Empty);
        let mut instance = picker.mount(ForwardedRef::new());

        instance.dispatch(&props_for(&source), PickerEvent::SetToday, &env);
        assert_eq!(source.get(), RawInput::Value(day(2000, Month::May, 5)));

        let props = props_for(&source)
            .date_adapter(TimeAdapter::with_fixed_now(day(2022, Month::February, 2)));
        instance.dispatch(&props, PickerEvent::SetToday, &env);
        assert_eq!(source.get(), RawInput::Value(day(2022, Month::February, 2)));
    }

    #[test]
    fn desktop_closes_and_accepts_on_finished_selection() {
        let picker = make_picker_with_state_and_wrapper(DesktopWrapper, iso_options()).unwrap();
        let (accepted, on_accept) = recorder();
        let opened = Rc::new(Cell::new(0));
        let closed = Rc::new(Cell::new(0));
        let source = value(RawInput::Empty);
        let props = props_for(&source)
            .on_accept(on_accept)
            .on_open({
                let opened = Rc::clone(&opened);
                move |_| opened.set(opened.get() + 1)
            })
            .on_close({
                let closed = Rc::clone(&closed);
                move |_| closed.set(closed.get() + 1)
            });
        let env = Environment::new();
        let mut instance = picker.mount(ForwardedRef::new());

        let frame = instance.render(&props, &env);
        assert!(!frame.open);
        assert_eq!(frame.content, None);

        let frame = instance.dispatch(&props, PickerEvent::Open, &env);
        assert!(frame.open);
        assert_eq!(opened.get(), 1);

        let picked = day(2021, Month::January, 7);
        let frame = instance.dispatch(
            &props,
            PickerEvent::Select {
                date: picked,
                state: SelectionState::Partial,
            },
            &env,
        );
        assert!(frame.open);
        assert!(accepted.borrow().is_empty());

        let frame = instance.dispatch(
            &props,
            PickerEvent::Select {
                date: picked,
                state: SelectionState::Finish,
            },
            &env,
        );
        assert!(!frame.open);
        assert_eq!(closed.get(), 1);
        assert_eq!(*accepted.borrow(), [PickerValue::Valid(picked)]);
    }

    #[test]
    fn mobile_waits_for_accept() {
        let picker = make_picker_with_state_and_wrapper(MobileWrapper, iso_options()).unwrap();
        let (accepted, on_accept) = recorder();
        let source = value(RawInput::Empty);
        let props = props_for(&source).on_accept(on_accept);
        let env = Environment::new();
        let mut instance = picker.mount(ForwardedRef::new());

        instance.dispatch(&props, PickerEvent::Open, &env);
        let picked = day(2021, Month::January, 7);
        let frame = instance.dispatch(
            &props,
            PickerEvent::Select {
                date: picked,
                state: SelectionState::Finish,
            },
            &env,
        );
        assert!(frame.open);
        assert!(accepted.borrow().is_empty());

        let frame = instance.dispatch(&props, PickerEvent::Accept, &env);
        assert!(!frame.open);
        assert_eq!(*accepted.borrow(), [PickerValue::Valid(picked)]);
    }

    #[test]
    fn dismiss_closes_without_accepting() {
        let picker = make_picker_with_state_and_wrapper(MobileWrapper, iso_options()).unwrap();
        let (accepted, on_accept) = recorder();
        let source = value(RawInput::Empty);
        let props = props_for(&source).on_accept(on_accept);
        let env = Environment::new();
        let mut instance = picker.mount(ForwardedRef::new());

        instance.dispatch(&props, PickerEvent::Open, &env);
        let frame = instance.dispatch(&props, PickerEvent::Dismiss, &env);
        assert!(!frame.open);

        instance.dispatch(&props, PickerEvent::Open, &env);
        let frame = instance.dispatch(&props, PickerEvent::OutsideInteraction, &env);
        assert!(!frame.open);
        assert!(accepted.borrow().is_empty());
    }

    #[test]
    fn clear_commits_the_empty_value() {
        let picker = make_picker_with_state_and_wrapper(MobileWrapper, iso_options()).unwrap();
        let (accepted, on_accept) = recorder();
        let source = value(RawInput::Value(day(2021, Month::January, 5)));
        let props = props_for(&source).on_accept(on_accept);
        let mut instance = picker.mount(ForwardedRef::new());

        let frame = instance.dispatch(&props, PickerEvent::Clear, &Environment::new());
        assert_eq!(source.get(), RawInput::Empty);
        assert_eq!(*accepted.borrow(), [PickerValue::Empty]);
        assert_eq!(frame.input.unwrap().props.display_value, "");
    }

    #[test]
    fn disabled_picker_does_not_open_or_change() {
        let picker = make_picker_with_state_and_wrapper(DesktopWrapper, iso_options()).unwrap();
        let source = value(RawInput::Empty);
        let props = props_for(&source).disabled(true);
        let env = Environment::new();
        let mut instance = picker.mount(ForwardedRef::new());

        let frame = instance.dispatch(&props, PickerEvent::Open, &env);
        assert!(!frame.open);
        instance.dispatch(&props, PickerEvent::InputChanged("2021-01-05".into()), &env);
        assert_eq!(source.get(), RawInput::Empty);
    }

    #[test]
    fn controlled_open_overrides_instance_state() {
        let picker = make_picker_with_state_and_wrapper(DesktopWrapper, iso_options()).unwrap();
        let closed = Rc::new(Cell::new(0));
        let source = value(RawInput::Empty);
        let props = props_for(&source).open(true).on_close({
            let closed = Rc::clone(&closed);
            move |_| closed.set(closed.get() + 1)
        });
        let env = Environment::new();
        let mut instance = picker.mount(ForwardedRef::new());

        assert!(instance.render(&props, &env).open);
        let frame = instance.dispatch(&props, PickerEvent::Dismiss, &env);
        assert!(frame.open);
        assert_eq!(closed.get(), 1);
        assert_eq!(instance.open_state(), OpenState::Closed);
    }

    #[test]
    fn validation_changes_are_reported_once() {
        let picker = make_picker_with_state_and_wrapper(DesktopWrapper, iso_options()).unwrap();
        let (errors, on_error) = recorder();
        let source = value(RawInput::Value(day(2021, Month::March, 1)));
        let props = props_for(&source).variant(january()).on_error(on_error);
        let env = Environment::new();
        let mut instance = picker.mount(ForwardedRef::new());

        instance.render(&props, &env);
        instance.render(&props, &env);
        assert_eq!(errors.borrow().len(), 1);
        assert_eq!(errors.borrow()[0].error, Some(ValidationError::MaxDate));

        source.set(RawInput::Value(day(2021, Month::January, 20)));
        instance.render(&props, &env);
        assert_eq!(errors.borrow().len(), 2);
        assert_eq!(errors.borrow()[1].error, None);
    }

    #[test]
    fn forwarded_ref_tracks_the_input() {
        let env = Environment::new();
        let source = value(RawInput::Value(day(2021, Month::January, 5)));

        let desktop = make_picker_with_state_and_wrapper(DesktopWrapper, iso_options()).unwrap();
        let input_ref = ForwardedRef::new();
        let mut instance = desktop.mount(input_ref.clone());
        instance.render(&props_for(&source).id("start"), &env);
        let element = input_ref.get().unwrap();
        assert_eq!(element.kind, InputKind::Keyboard);
        assert_eq!(element.value, "2021-01-05");
        assert_eq!(element.id.as_deref(), Some("start"));
        assert!(element.editable);

        let mobile = make_picker_with_state_and_wrapper(MobileWrapper, iso_options()).unwrap();
        mobile
            .mount(input_ref.clone())
            .render(&props_for(&source), &env);
        let element = input_ref.get().unwrap();
        assert_eq!(element.kind, InputKind::Pure);
        assert!(!element.editable);

        let fixed = make_picker_with_state_and_wrapper(StaticWrapper, iso_options()).unwrap();
        fixed
            .mount(input_ref.clone())
            .render(&props_for(&source), &env);
        assert!(!input_ref.is_attached());
    }

    #[test]
    fn responsive_wrapper_follows_pointer_capability() {
        let picker = make_picker_with_state_and_wrapper(ResponsiveWrapper, iso_options()).unwrap();
        let source = value(RawInput::Empty);
        let props = props_for(&source);

        let fine = Environment::new().with(PointerCapability::Fine);
        let mut instance = picker.mount(ForwardedRef::new());
        assert_eq!(instance.render(&props, &fine).variant, WrapperVariant::Desktop);
        assert_eq!(picker.wrapper().variant(&Environment::new()), WrapperVariant::Mobile);
    }
}
