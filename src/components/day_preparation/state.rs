use super::models::DayPreparation;

/// Generation number stamped on one invocation of the prepare action
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

impl RequestToken {
    pub fn generation(&self) -> u64 {
        self.0
    }
}

/// State of the day preparation view.
///
/// Transitions return a new value instead of mutating in place. `loading`
/// is true exactly while the latest issued request is in flight.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    loading: bool,
    result: Option<DayPreparation>,
    generation: u64,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn result(&self) -> Option<&DayPreparation> {
        self.result.as_ref()
    }

    /// Generation of the latest issued request, 0 before the first one
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Start a new request; earlier tokens become stale
    pub fn begin(&self) -> (Self, RequestToken) {
        let generation = self.generation + 1;
        let next = Self {
            loading: true,
            result: self.result.clone(),
            generation,
        };
        (next, RequestToken(generation))
    }

    /// Apply the outcome of a request.
    ///
    /// Returns `None` when `token` is not the latest issued one, in which
    /// case the outcome must be discarded.
    pub fn settle(&self, token: RequestToken, outcome: DayPreparation) -> Option<Self> {
        if !self.accepts(token) {
            return None;
        }
        Some(Self {
            loading: false,
            result: Some(outcome),
            generation: self.generation,
        })
    }

    /// Whether an outcome stamped with `token` would be applied
    pub fn accepts(&self, token: RequestToken) -> bool {
        self.loading && token.0 == self.generation
    }

    /// Whether the request stamped with `token` has been settled or superseded
    /// and the view is idle again
    pub fn is_settled_for(&self, token: RequestToken) -> bool {
        !self.loading && self.generation >= token.0
    }
}
