//! Span definitions per operation: calculation, trend generation, risk scan.

/// Create a span around one full calculation.
#[macro_export]
macro_rules! calculation_span {
    ($scope:expr, $target_year:expr) => {
        ::tracing::info_span!("palm.calculate", scope = %$scope, target_year = $target_year)
    };
}

/// Create a span around trend series generation.
#[macro_export]
macro_rules! trend_span {
    ($scope:expr, $points:expr) => {
        ::tracing::debug_span!("palm.trend", scope = %$scope, points = $points)
    };
}

/// Create a span around a partner risk scan.
#[macro_export]
macro_rules! risk_span {
    ($birth_date:expr) => {
        ::tracing::info_span!("palm.risk", birth_date = %$birth_date)
    };
}

