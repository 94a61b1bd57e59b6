/// Macro to create callbacks that capture signals and execute a block
///
/// Usage examples:
/// ```rust
/// use sprig::{action, signal};
///
/// let count = signal!(0);
/// let other = signal!(0);
///
/// // Simplest - auto-captures signal with same name
/// let increment = action!(count => { count.update(|c| c + 1); });
///
/// // Multiple signals
/// let both = action!(count, other => { count.update(|c| c + 1); other.set(1); });
///
/// // Custom variable names
/// let renamed = action!(count as c => { c.update(|x| x + 1); });
///
/// increment.emit();
/// both.emit();
/// renamed.emit();
/// assert_eq!(count.get(), 3);
/// ```
#[macro_export]
macro_rules! action {
    // Single signal, auto-capture with same name
    ($signal:ident => $body:block) => {{
        let $signal = $signal.clone();
        $crate::event::Callback::new(move || $body)
    }};

    // Multiple signals, auto-capture with same names
    ($($signal:ident),+ => $body:block) => {{
        $(let $signal = $signal.clone();)+
        $crate::event::Callback::new(move || $body)
    }};

    // Signals with custom variable names
    ($($signal:ident as $captured:ident),+ => $body:block) => {{
        $(let $captured = $signal.clone();)+
        $crate::event::Callback::new(move || $body)
    }};
}

#[cfg(test)]
mod tests {
    use crate::signal::Signal;

    #[test]
    fn action_captures_signal_clone() {
        let count = Signal::new(0);
        let increment = action!(count => { count.update(|c| c + 1); });

        increment.emit();
        increment.emit();

        assert_eq!(count.get(), 2);
    }

    #[test]
    fn action_with_renamed_capture() {
        let source = Signal::new(1);
        let target = Signal::new(0);
        let copy = action!(source as s, target as t => { t.set(s.get() * 10); });

        copy.emit();

        assert_eq!(target.get(), 10);
    }
}
