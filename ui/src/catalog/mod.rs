//! Service catalog: an individual/corporate filter over the slide carousel.

mod carousel;
pub use carousel::{
    AutoplayConfig, BreakpointConfig, CarouselConfig, CarouselState, PaginationConfig, SlideWidget,
};

mod slides;
pub use slides::{Slide, SERVICE_SLIDES};

mod view;
pub use view::ServiceCatalog;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ServiceCategory {
    #[default]
    Individual,
    Corporate,
}

/// Title/subtitle pair shown above the carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceHeading {
    pub title: &'static str,
    pub subtitle: &'static str,
}

impl ServiceCategory {
    pub const ALL: [ServiceCategory; 2] = [ServiceCategory::Individual, ServiceCategory::Corporate];

    /// Value of the slides' `data-service` tag.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Individual => "individual",
            Self::Corporate => "corporate",
        }
    }

    pub fn heading(self) -> ServiceHeading {
        match self {
            Self::Individual => ServiceHeading {
                title: "Personal IT Solutions",
                subtitle: "Tailored technology services for your personal and professional needs",
            },
            Self::Corporate => ServiceHeading {
                title: "Enterprise Solutions",
                subtitle: "Scalable IT infrastructure and services for your business growth",
            },
        }
    }
}

pub const TAB_ACTIVE_CLASS: &str = "btn active btn-light";
pub const TAB_INACTIVE_CLASS: &str = "btn btn-outline-light";

/// Category selection plus the slide filter it drives.
///
/// The widget is attached after construction; until then filtering is a
/// no-op and every slide stays visible.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogController<W> {
    category: ServiceCategory,
    tags: Vec<ServiceCategory>,
    hidden: Vec<bool>,
    widget: Option<W>,
}

impl<W: SlideWidget> CatalogController<W> {
    pub fn new(tags: Vec<ServiceCategory>) -> Self {
        let hidden = vec![false; tags.len()];
        Self {
            category: ServiceCategory::default(),
            tags,
            hidden,
            widget: None,
        }
    }

    /// Catalog over [`SERVICE_SLIDES`].
    pub fn for_service_slides() -> Self {
        Self::new(SERVICE_SLIDES.iter().map(|slide| slide.category).collect())
    }

    /// Install the carousel. Acts as the widget's ready hook: the current
    /// category's filter is applied right away.
    pub fn attach(&mut self, widget: W) {
        self.widget = Some(widget);
        self.filter(self.category);
    }

    pub fn switch_category(&mut self, category: ServiceCategory) {
        tracing::debug!(category = category.as_str(), "switching service category");
        self.category = category;
        self.filter(category);
    }

    /// Show exactly the slides tagged `category`, then reset the carousel to
    /// its first slide.
    pub fn filter(&mut self, category: ServiceCategory) {
        let Some(widget) = self.widget.as_mut() else {
            return;
        };
        for (hidden, tag) in self.hidden.iter_mut().zip(&self.tags) {
            *hidden = *tag != category;
        }
        let visible = visible_indices(&self.hidden);
        widget.update(&visible);
        widget.slide_to(0);
    }

    /// Recompute carousel layout after a viewport change.
    pub fn relayout(&mut self, viewport_width: f64) {
        let visible = visible_indices(&self.hidden);
        if let Some(widget) = self.widget.as_mut() {
            widget.resize(viewport_width);
            widget.update(&visible);
        }
    }

    pub fn category(&self) -> ServiceCategory {
        self.category
    }

    pub fn tab_class(&self, tab: ServiceCategory) -> &'static str {
        if tab == self.category {
            TAB_ACTIVE_CLASS
        } else {
            TAB_INACTIVE_CLASS
        }
    }

    pub fn heading(&self) -> ServiceHeading {
        self.category.heading()
    }

    pub fn is_hidden(&self, slide: usize) -> bool {
        self.hidden.get(slide).copied().unwrap_or(true)
    }

    pub fn visible_slides(&self) -> Vec<usize> {
        visible_indices(&self.hidden)
    }

    pub fn widget(&self) -> Option<&W> {
        self.widget.as_ref()
    }

    pub fn widget_mut(&mut self) -> Option<&mut W> {
        self.widget.as_mut()
    }
}

fn visible_indices(hidden: &[bool]) -> Vec<usize> {
    hidden
        .iter()
        .enumerate()
        .filter(|(_, hidden)| !**hidden)
        .map(|(index, _)| index)
        .collect()
}
