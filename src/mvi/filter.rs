//! Intent filters applied before intents become actions.

/// Decides whether an incoming intent enters the pipeline.
pub trait IntentFilter<I>: Send + 'static {
    fn accept(&mut self, intent: &I) -> bool;
}

/// Accepts every intent.
#[derive(Debug, Default, Clone, Copy)]
pub struct PassThrough;

impl<I> IntentFilter<I> for PassThrough {
    fn accept(&mut self, _intent: &I) -> bool {
        true
    }
}

/// Accepts the first intent matching `matches`, drops every later match,
/// and lets all non-matching intents through.
///
/// Used to keep a one-shot intent (such as an initial load) from being
/// replayed when an observer reattaches.
pub struct TakeFirst<I> {
    matches: fn(&I) -> bool,
    taken: bool,
}

impl<I> TakeFirst<I> {
    pub fn new(matches: fn(&I) -> bool) -> Self {
        Self {
            matches,
            taken: false,
        }
    }

    /// Whether the matching intent has already been accepted.
    pub fn is_taken(&self) -> bool {
        self.taken
    }
}

impl<I: 'static> IntentFilter<I> for TakeFirst<I> {
    fn accept(&mut self, intent: &I) -> bool {
        if !(self.matches)(intent) {
            return true;
        }
        if self.taken {
            tracing::debug!("Dropping repeated one-shot intent");
            return false;
        }
        self.taken = true;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    enum Trigger {
        Load,
        Other,
    }

    fn is_load(trigger: &Trigger) -> bool {
        matches!(trigger, Trigger::Load)
    }

    #[test]
    fn take_first_accepts_only_first_match() {
        let mut filter = TakeFirst::new(is_load);
        assert!(!filter.is_taken());
        assert!(filter.accept(&Trigger::Load));
        assert!(filter.is_taken());
        assert!(!filter.accept(&Trigger::Load));
        assert!(!filter.accept(&Trigger::Load));
    }

    #[test]
    fn take_first_passes_non_matching_intents() {
        let mut filter = TakeFirst::new(is_load);
        assert!(filter.accept(&Trigger::Other));
        assert!(filter.accept(&Trigger::Load));
        assert!(filter.accept(&Trigger::Other));
        assert!(filter.accept(&Trigger::Other));
    }

    #[test]
    fn pass_through_accepts_everything() {
        let mut filter = PassThrough;
        assert!(IntentFilter::<Trigger>::accept(&mut filter, &Trigger::Load));
        assert!(IntentFilter::<Trigger>::accept(&mut filter, &Trigger::Load));
    }
}
