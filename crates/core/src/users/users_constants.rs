/// Countries accepted on the sign-up form, as stored.
pub const COUNTRIES: &[&str] = &[
    "chile",
    "colombia",
    "peru",
    "argentina",
    "mexico",
    "brasil",
    "ecuador",
    "venezuela",
    "uruguay",
    "paraguay",
    "bolivia",
];

/// Minimum age to register.
pub const MINIMUM_AGE: i32 = 18;
