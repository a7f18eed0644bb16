//! The closed catalog of themable dashboard elements.
//!
//! Every UI region that accepts independent style overrides is named
//! here. The catalog is immutable and not user-extensible: theme
//! documents refer to elements by their kebab-case names, and a name
//! outside the catalog resolves to the palette fallback instead of
//! failing the render pass.

/// A dashboard page that carries its own background and widget styling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Route {
    Chores,
    Shopping,
    Meals,
    Calendar,
}

impl Route {
    pub const ALL: [Route; 4] = [Route::Chores, Route::Shopping, Route::Meals, Route::Calendar];

    /// The route's name as it appears in rendering contexts and element
    /// identifiers (e.g. `chores`).
    pub fn name(&self) -> &'static str {
        match self {
            Route::Chores => "chores",
            Route::Shopping => "shopping",
            Route::Meals => "meals",
            Route::Calendar => "calendar",
        }
    }

    pub fn from_name(name: &str) -> Option<Route> {
        Route::ALL.into_iter().find(|r| r.name() == name)
    }
}

/// One fixed, named UI region eligible for independent style overrides.
///
/// The per-route variants let a theme give, say, the chores page its own
/// background without touching the global page background.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ThemableElement {
    PageBackground,
    Sidebar,
    Header,
    Card,
    Widget,
    ButtonPrimary,
    ButtonSecondary,
    RouteBackground(Route),
    RouteWidget(Route),
}

impl ThemableElement {
    /// Every element in the catalog, route variants included.
    pub const ALL: [ThemableElement; 15] = [
        ThemableElement::PageBackground,
        ThemableElement::Sidebar,
        ThemableElement::Header,
        ThemableElement::Card,
        ThemableElement::Widget,
        ThemableElement::ButtonPrimary,
        ThemableElement::ButtonSecondary,
        ThemableElement::RouteBackground(Route::Chores),
        ThemableElement::RouteBackground(Route::Shopping),
        ThemableElement::RouteBackground(Route::Meals),
        ThemableElement::RouteBackground(Route::Calendar),
        ThemableElement::RouteWidget(Route::Chores),
        ThemableElement::RouteWidget(Route::Shopping),
        ThemableElement::RouteWidget(Route::Meals),
        ThemableElement::RouteWidget(Route::Calendar),
    ];

    /// The element's stable identifier, used both as a theme document
    /// key and as the namespace prefix for its style variables.
    pub fn name(&self) -> &'static str {
        match self {
            ThemableElement::PageBackground => "page-background",
            ThemableElement::Sidebar => "sidebar",
            ThemableElement::Header => "header",
            ThemableElement::Card => "card",
            ThemableElement::Widget => "widget",
            ThemableElement::ButtonPrimary => "button-primary",
            ThemableElement::ButtonSecondary => "button-secondary",
            ThemableElement::RouteBackground(Route::Chores) => "chores-background",
            ThemableElement::RouteBackground(Route::Shopping) => "shopping-background",
            ThemableElement::RouteBackground(Route::Meals) => "meals-background",
            ThemableElement::RouteBackground(Route::Calendar) => "calendar-background",
            ThemableElement::RouteWidget(Route::Chores) => "chores-widget",
            ThemableElement::RouteWidget(Route::Shopping) => "shopping-widget",
            ThemableElement::RouteWidget(Route::Meals) => "meals-widget",
            ThemableElement::RouteWidget(Route::Calendar) => "calendar-widget",
        }
    }

    /// Looks an element up by its identifier. `None` means the name is
    /// outside the closed catalog.
    pub fn from_name(name: &str) -> Option<ThemableElement> {
        ThemableElement::ALL.into_iter().find(|e| e.name() == name)
    }

    /// Whether this element paints a page background, which makes it
    /// eligible for route-specific overrides.
    pub fn is_page_background(&self) -> bool {
        matches!(
            self,
            ThemableElement::PageBackground | ThemableElement::RouteBackground(_)
        )
    }
}
