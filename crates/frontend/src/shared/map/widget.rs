//! Office map widget: one circle marker per district office, coloured by
//! site status, with a toggle between the two preset tile providers.
//! Toggling only swaps the tile layer — markers stay untouched.

use contracts::shared::geo::{MapModel, TileProvider, DEFAULT_CENTER, DEFAULT_ZOOM};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::leaflet;

const MAP_ELEMENT_ID: &str = "office-map";

#[component]
pub fn OfficeMap(
    /// Model with the points to plot (static sample data on every page
    /// that uses the widget).
    model: MapModel,
) -> impl IntoView {
    let model = StoredValue::new(model);
    let (provider_label, set_provider_label) =
        signal(model.with_value(|m| m.active_provider().label));

    // Browser-only handles; not Send, so stored locally.
    let map_instance = StoredValue::new_local(None::<leaflet::Map>);
    let tile_instance = StoredValue::new_local(None::<leaflet::TileLayer>);

    let add_tile_layer = move |provider: &'static TileProvider| {
        let Some(map) = map_instance.get_value() else {
            return;
        };
        if let Some(old) = tile_instance.get_value() {
            old.remove_layer();
        }
        let layer = leaflet::tile_layer(
            provider.url_template,
            &leaflet::tile_options(provider.attribution),
        );
        layer.add_to(&map);
        tile_instance.set_value(Some(layer));
    };

    // Create the map once the container element exists.
    let map_initialized = StoredValue::new(false);
    Effect::new(move |_| {
        if map_initialized.get_value() {
            return;
        }
        map_initialized.set_value(true);
        spawn_local(async move {
            // Give the router a frame to attach the container.
            gloo_timers::future::TimeoutFuture::new(100).await;

            let map = leaflet::map(MAP_ELEMENT_ID);
            map.set_view(
                &leaflet::lat_lng(DEFAULT_CENTER.0, DEFAULT_CENTER.1),
                DEFAULT_ZOOM,
            );
            map_instance.set_value(Some(map));

            add_tile_layer(model.with_value(|m| m.active_provider()));

            // Markers are created once and never rebuilt.
            let Some(map) = map_instance.get_value() else {
                return;
            };
            model.with_value(|m| {
                for point in &m.points {
                    let marker = leaflet::circle_marker(
                        &leaflet::lat_lng(point.lat, point.lng),
                        &leaflet::marker_options(point.status.color()),
                    );
                    marker.bind_popup(&MapModel::popup_html(point));
                    marker.marker_add_to(&map);
                }
            });
        });
    });

    let toggle_provider = move |_| {
        model.update_value(|m| m.toggle_layer());
        let provider = model.with_value(|m| m.active_provider());
        set_provider_label.set(provider.label);
        add_tile_layer(provider);
    };

    // Tear the instance down so the library's DOM bindings are not
    // leaked across route changes.
    on_cleanup(move || {
        if let Some(map) = map_instance.get_value() {
            map.remove();
        }
        map_instance.set_value(None);
        tile_instance.set_value(None);
    });

    view! {
        <div class="office-map">
            <div class="office-map__toolbar">
                <button class="office-map__layer-toggle" on:click=toggle_provider>
                    {crate::shared::icons::icon("layers")}
                    {move || format!(" Tiles: {}", provider_label.get())}
                </button>
            </div>
            <div
                id=MAP_ELEMENT_ID
                class="office-map__canvas"
                style="height: 420px; border-radius: 8px;"
            ></div>
        </div>
    }
}
