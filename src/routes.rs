// SPDX-License-Identifier: MPL-2.0
//! Navigation model shared by the header, the footer, and the app router.

/// Screens the user can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Home,
    Services,
    Portfolio,
    Contact,
}

impl Route {
    /// Every route, in display order. The header and footer map this list to
    /// navigation buttons.
    pub const ALL: [Route; 4] = [
        Route::Home,
        Route::Services,
        Route::Portfolio,
        Route::Contact,
    ];

    /// Returns the i18n message key for this route's navigation label.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Route::Home => "nav-home",
            Route::Services => "nav-services",
            Route::Portfolio => "nav-portfolio",
            Route::Contact => "nav-contact",
        }
    }

    /// Returns the i18n message key for this route's page heading.
    pub fn heading_key(&self) -> &'static str {
        match self {
            Route::Home => "page-home-heading",
            Route::Services => "page-services-heading",
            Route::Portfolio => "page-portfolio-heading",
            Route::Contact => "page-contact-heading",
        }
    }

    /// Returns the i18n message key for this route's introductory text.
    pub fn blurb_key(&self) -> &'static str {
        match self {
            Route::Home => "page-home-blurb",
            Route::Services => "page-services-blurb",
            Route::Portfolio => "page-portfolio-blurb",
            Route::Contact => "page-contact-blurb",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_route_is_home() {
        assert_eq!(Route::default(), Route::Home);
    }

    #[test]
    fn all_routes_are_unique() {
        for (i, a) in Route::ALL.iter().enumerate() {
            for b in Route::ALL.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn i18n_keys_are_distinct_per_route() {
        let keys: Vec<_> = Route::ALL.iter().map(Route::i18n_key).collect();
        let mut deduped = keys.clone();
        deduped.dedup();
        assert_eq!(keys.len(), deduped.len());
    }
}
