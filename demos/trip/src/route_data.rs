//! Demo route fixture.
//!
//! A short walking route through central Lima, from Plaza San Martín to
//! Plaza Mayor along Jirón de la Unión.  In the application this polyline
//! arrives from the external routing service; the demo hard-codes one
//! response.

use sr_core::Route;

pub fn demo_route() -> Route {
    Route::from_pairs(&[
        (-12.0514, -77.0365), // Plaza San Martín
        (-12.0505, -77.0357),
        (-12.0497, -77.0349),
        (-12.0489, -77.0340),
        (-12.0481, -77.0332),
        (-12.0472, -77.0321),
        (-12.0464, -77.0311),
        (-12.0464, -77.0301), // Plaza Mayor
    ])
}
