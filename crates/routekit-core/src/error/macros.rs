//! Error macros for routekit

/// Macro for returning invalid value errors
#[macro_export]
macro_rules! bail_invalid {
    ($context:expr, $value:expr) => {
        return Err($crate::error::RouteError::invalid_value($context, $value))
    };
}

/// Macro for rejecting inputs beyond an exponential algorithm's node bound
#[macro_export]
macro_rules! bail_too_large {
    ($operation:expr, $nodes:expr, $limit:expr) => {
        return Err($crate::error::RouteError::too_large(
            $operation, $nodes, $limit,
        ))
    };
}
