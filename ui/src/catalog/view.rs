use std::rc::Rc;

use dioxus::prelude::*;
use futures_util::StreamExt;

use crate::core::debounce::Debouncer;
use crate::core::{platform, timing};
use crate::site::use_site;

use super::{CarouselState, CatalogController, ServiceCategory, SlideWidget, SERVICE_SLIDES};

#[component]
pub fn ServiceCatalog() -> Element {
    let site = use_site();
    let page = site.page;
    let carousel_config = site.services.config.carousel.clone();
    let resize_wait_ms = site.services.config.resize_debounce_ms;

    let mut catalog = use_signal(CatalogController::<CarouselState>::for_service_slides);

    // Construct the carousel once the slide markup exists; attaching runs the ready hook.
    {
        let config = carousel_config.clone();
        use_effect(move || {
            let mut carousel = CarouselState::new(config.clone());
            if let Some(width) = platform::viewport_width() {
                carousel.resize(width);
            }
            catalog.with_mut(|c| c.attach(carousel));
        });
    }

    let resize = use_coroutine(move |mut rx: UnboundedReceiver<()>| {
        let debouncer = Debouncer::new(resize_wait_ms);
        async move {
            while rx.next().await.is_some() {
                let pending = debouncer.call(move || {
                    if let Some(width) = platform::viewport_width() {
                        catalog.with_mut(|c| c.relayout(width));
                    }
                });
                spawn(async move {
                    pending.await;
                });
            }
        }
    });

    let resize_tx = resize.tx();
    use_hook(move || {
        Rc::new(platform::WindowListener::attach("resize", move || {
            let _ = resize_tx.unbounded_send(());
        }))
    });

    let autoplay_delay = carousel_config
        .autoplay
        .enabled
        .then_some(carousel_config.autoplay.delay_ms);
    use_future(move || async move {
        let Some(delay_ms) = autoplay_delay else {
            return;
        };
        loop {
            timing::sleep_ms(delay_ms).await;
            catalog.with_mut(|c| {
                if let Some(carousel) = c.widget_mut() {
                    carousel.autoplay_tick();
                }
            });
        }
    });

    let state = catalog.read();
    let heading = state.heading();
    let individual_class = state.tab_class(ServiceCategory::Individual);
    let corporate_class = state.tab_class(ServiceCategory::Corporate);
    let hidden: Vec<bool> = (0..SERVICE_SLIDES.len()).map(|i| state.is_hidden(i)).collect();
    let (transform, basis, position, bullets) = state
        .widget()
        .map(|c| (c.track_transform(), c.slide_basis(), c.position(), c.visible().len()))
        .unwrap_or_else(|| ("none".to_string(), "100%".to_string(), 0, 0));
    drop(state);

    let individual_label = page.read().markup("catalog-individual");
    let corporate_label = page.read().markup("catalog-corporate");
    let gap = carousel_config.space_between;
    let show_navigation = carousel_config.navigation;
    let show_pagination = carousel_config.pagination.enabled;

    rsx! {
        section { class: "services-catalog",
            div { class: "services-catalog__tabs",
                button {
                    id: "individualTab",
                    r#type: "button",
                    class: "{individual_class}",
                    onclick: move |_| catalog.with_mut(|c| c.switch_category(ServiceCategory::Individual)),
                    dangerous_inner_html: "{individual_label}",
                }
                button {
                    id: "corporateTab",
                    r#type: "button",
                    class: "{corporate_class}",
                    onclick: move |_| catalog.with_mut(|c| c.switch_category(ServiceCategory::Corporate)),
                    dangerous_inner_html: "{corporate_label}",
                }
            }

            div { class: "services-catalog__heading",
                h2 { id: "servicesTitle", "{heading.title}" }
                p { id: "servicesSubtitle", "{heading.subtitle}" }
            }

            div { class: "swiper servicesSwiper",
                div {
                    class: "swiper-wrapper",
                    style: "transform: {transform}; gap: {gap}px;",
                    for (index, slide) in SERVICE_SLIDES.iter().enumerate() {
                        div {
                            key: "{slide.id}",
                            class: "swiper-slide",
                            "data-service": slide.category.as_str(),
                            style: if hidden[index] { "display: none;".to_string() } else { format!("display: block; flex: 0 0 {basis};") },
                            div { class: "card service-slide",
                                i { class: "{slide.icon} service-slide__icon" }
                                h3 { class: "service-slide__title", "{slide.title}" }
                                p { class: "service-slide__body", "{slide.body}" }
                            }
                        }
                    }
                }

                if show_navigation {
                    button {
                        r#type: "button",
                        class: "swiper-button-prev",
                        aria_label: "Previous slide",
                        onclick: move |_| catalog.with_mut(|c| {
                            if let Some(carousel) = c.widget_mut() {
                                carousel.prev();
                            }
                        }),
                    }
                    button {
                        r#type: "button",
                        class: "swiper-button-next",
                        aria_label: "Next slide",
                        onclick: move |_| catalog.with_mut(|c| {
                            if let Some(carousel) = c.widget_mut() {
                                carousel.next();
                            }
                        }),
                    }
                }

                if show_pagination {
                    div { class: "swiper-pagination swiper-pagination-clickable",
                        for bullet in 0..bullets {
                            span {
                                key: "{bullet}",
                                class: if bullet == position {
                                    "swiper-pagination-bullet swiper-pagination-bullet-active"
                                } else {
                                    "swiper-pagination-bullet"
                                },
                                onclick: move |_| catalog.with_mut(|c| {
                                    if let Some(carousel) = c.widget_mut() {
                                        carousel.select(bullet);
                                    }
                                }),
                            }
                        }
                    }
                }
            }
        }
    }
}
