use crate::observer::SubscriptionId;

#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum ObserveError {
    #[error("target `{0}` is not attached and cannot be observed")]
    Detached(String),
    #[error("subscription {0} is not active")]
    UnknownSubscription(SubscriptionId),
}

pub type ObserveResult<T> = Result<T, ObserveError>;
