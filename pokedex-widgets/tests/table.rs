//! Integration tests for the table widget, against a mock catalog.

use std::time::Duration;

use pokedex_lib::PokedexClient;
use pokedex_widgets::table::{Column, TableWidget};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn pokemon_json(id: u32, name: &str, height: u32, weight: u32, types: &[&str]) -> serde_json::Value {
    json!({
        "id": id,
        "name": name,
        "height": height,
        "weight": weight,
        "types": types.iter().enumerate().map(|(i, t)| json!({
            "slot": i + 1,
            "type": { "name": t, "url": format!("https://pokeapi.co/api/v2/type/{t}/") }
        })).collect::<Vec<_>>(),
    })
}

/// Mounts a detail endpoint at `/pokemon/<id>/` and returns its reference.
async fn mount_pokemon(
    server: &MockServer,
    id: u32,
    name: &str,
    height: u32,
    weight: u32,
    types: &[&str],
) -> serde_json::Value {
    Mock::given(method("GET"))
        .and(path(format!("/pokemon/{id}/")))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(pokemon_json(id, name, height, weight, types)),
        )
        .mount(server)
        .await;
    json!({ "name": name, "url": format!("{}/pokemon/{id}/", server.uri()) })
}

fn widget_for(server: &MockServer) -> TableWidget {
    TableWidget::new(PokedexClient::builder().base_url(server.uri()).build())
}

#[tokio::test]
async fn test_initial_page_fetch_yields_sorted_rows() {
    let server = MockServer::start().await;

    let pidgey = mount_pokemon(&server, 16, "pidgey", 3, 18, &["normal", "flying"]).await;
    let abra = mount_pokemon(&server, 63, "abra", 9, 195, &["psychic"]).await;

    Mock::given(method("GET"))
        .and(path("/pokemon"))
        .and(query_param("offset", "0"))
        .and(query_param("limit", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 2, "next": null, "previous": null,
            "results": [pidgey, abra],
        })))
        .expect(1)
        .mount(&server)
        .await;

    let widget = widget_for(&server);
    widget.refresh().await;

    let rows = widget.rows();
    assert_eq!(rows.len(), 2);
    // Default sort is name ascending, regardless of response order.
    assert_eq!(rows[0].name, "abra");
    assert_eq!(rows[1].name, "pidgey");
    assert_eq!(rows[1].types, "normal, flying");
    assert!(!widget.is_loading());
    assert!(widget.error().is_none());
    assert!(widget.pagination_visible());
}

#[tokio::test]
async fn test_search_yields_single_matching_row() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/pokemon/pikachu"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(pokemon_json(25, "pikachu", 4, 60, &["electric"])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let widget = widget_for(&server);
    widget.set_search("Pikachu");
    widget.refresh().await;

    let rows = widget.rows();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].name, "pikachu");
    assert!(!widget.pagination_visible());
    assert!(widget.error().is_none());
}

#[tokio::test]
async fn test_search_miss_clears_rows_and_sets_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/pokemon/missingno"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
        .mount(&server)
        .await;

    let widget = widget_for(&server);
    widget.set_search("missingno");
    widget.refresh().await;

    assert!(widget.rows().is_empty());
    let error = widget.error().expect("error message expected");
    assert!(!error.is_empty());
    assert!(!widget.pagination_visible());
    assert!(!widget.is_loading());
}

#[tokio::test]
async fn test_network_failure_surfaces_generic_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/pokemon"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let widget = widget_for(&server);
    widget.refresh().await;

    assert!(widget.rows().is_empty());
    assert_eq!(widget.error().as_deref(), Some("Failed to load Pokémon data"));
}

#[tokio::test]
async fn test_page_change_refetches_next_batch() {
    let server = MockServer::start().await;

    let caterpie = mount_pokemon(&server, 10, "caterpie", 3, 29, &["bug"]).await;

    Mock::given(method("GET"))
        .and(path("/pokemon"))
        .and(query_param("offset", "5"))
        .and(query_param("limit", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 6, "next": null, "previous": null,
            "results": [caterpie],
        })))
        .expect(1)
        .mount(&server)
        .await;

    let widget = widget_for(&server);
    widget.set_page(1);
    widget.refresh().await;

    assert_eq!(widget.rows().len(), 1);
    assert_eq!(widget.rows()[0].name, "caterpie");
}

#[tokio::test]
async fn test_page_size_change_resets_page_index() {
    let server = MockServer::start().await;

    let caterpie = mount_pokemon(&server, 10, "caterpie", 3, 29, &["bug"]).await;

    Mock::given(method("GET"))
        .and(path("/pokemon"))
        .and(query_param("offset", "0"))
        .and(query_param("limit", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 1, "next": null, "previous": null,
            "results": [caterpie],
        })))
        .expect(1)
        .mount(&server)
        .await;

    let widget = widget_for(&server);
    widget.set_page(2);
    widget.set_page_size(10);
    assert_eq!(widget.query().page(), 0);

    widget.refresh().await;
    assert_eq!(widget.rows().len(), 1);
}

#[tokio::test]
async fn test_type_filter_pages_the_member_list() {
    let server = MockServer::start().await;

    let pikachu = mount_pokemon(&server, 25, "pikachu", 4, 60, &["electric"]).await;
    let raichu = mount_pokemon(&server, 26, "raichu", 8, 300, &["electric"]).await;
    let voltorb = mount_pokemon(&server, 100, "voltorb", 5, 104, &["electric"]).await;

    Mock::given(method("GET"))
        .and(path("/type/electric"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "electric",
            "pokemon": [
                { "slot": 1, "pokemon": pikachu },
                { "slot": 1, "pokemon": raichu },
                { "slot": 1, "pokemon": voltorb },
            ],
        })))
        .mount(&server)
        .await;

    let widget = widget_for(&server);
    widget.set_page_size(2);
    widget.set_type_filter(Some("electric".to_string()));
    widget.refresh().await;

    // First page of the filtered member list.
    let names: Vec<String> = widget.rows().iter().map(|r| r.name.clone()).collect();
    assert_eq!(names, vec!["pikachu", "raichu"]);

    widget.set_page(1);
    widget.refresh().await;
    let names: Vec<String> = widget.rows().iter().map(|r| r.name.clone()).collect();
    assert_eq!(names, vec!["voltorb"]);
}

#[tokio::test]
async fn test_sort_on_numeric_column_orders_current_rows() {
    let server = MockServer::start().await;

    let pidgey = mount_pokemon(&server, 16, "pidgey", 3, 18, &["normal", "flying"]).await;
    let abra = mount_pokemon(&server, 63, "abra", 9, 195, &["psychic"]).await;
    let onix = mount_pokemon(&server, 95, "onix", 88, 2100, &["rock", "ground"]).await;

    Mock::given(method("GET"))
        .and(path("/pokemon"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 3, "next": null, "previous": null,
            "results": [onix, pidgey, abra],
        })))
        .mount(&server)
        .await;

    let widget = widget_for(&server);
    widget.sort_on(Column::Weight);
    widget.refresh().await;

    let weights: Vec<u32> = widget.rows().iter().map(|r| r.weight).collect();
    assert!(weights.windows(2).all(|w| w[0] <= w[1]));

    // Sorting the active column again flips the direction.
    widget.sort_on(Column::Weight);
    widget.refresh().await;
    let weights: Vec<u32> = widget.rows().iter().map(|r| r.weight).collect();
    assert!(weights.windows(2).all(|w| w[0] >= w[1]));
}

#[tokio::test]
async fn test_select_all_visible_is_destructive() {
    let server = MockServer::start().await;

    let pidgey = mount_pokemon(&server, 16, "pidgey", 3, 18, &["normal", "flying"]).await;
    let abra = mount_pokemon(&server, 63, "abra", 9, 195, &["psychic"]).await;

    Mock::given(method("GET"))
        .and(path("/pokemon"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 2, "next": null, "previous": null,
            "results": [pidgey, abra],
        })))
        .mount(&server)
        .await;

    let widget = widget_for(&server);
    widget.refresh().await;

    // A selection left over from another page is discarded by select-all.
    widget.toggle_selected("mew");
    widget.toggle_selected("abra");

    widget.select_all_visible(true);
    let selected = widget.selected();
    assert_eq!(selected.len(), 2);
    assert!(widget.is_selected("abra"));
    assert!(widget.is_selected("pidgey"));
    assert!(!widget.is_selected("mew"));

    widget.select_all_visible(false);
    assert!(widget.selected().is_empty());
}

#[tokio::test]
async fn test_selection_survives_refetch() {
    let server = MockServer::start().await;

    let pidgey = mount_pokemon(&server, 16, "pidgey", 3, 18, &["normal", "flying"]).await;

    Mock::given(method("GET"))
        .and(path("/pokemon"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 1, "next": null, "previous": null,
            "results": [pidgey],
        })))
        .mount(&server)
        .await;

    let widget = widget_for(&server);
    widget.refresh().await;
    widget.toggle_selected("pidgey");

    widget.set_page(0);
    widget.refresh().await;

    assert!(widget.is_selected("pidgey"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_stale_response_is_discarded() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/pokemon/ditto"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(pokemon_json(132, "ditto", 3, 40, &["normal"]))
                .set_delay(Duration::from_millis(400)),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/pokemon/pikachu"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(pokemon_json(25, "pikachu", 4, 60, &["electric"])),
        )
        .mount(&server)
        .await;

    let widget = widget_for(&server);

    widget.set_search("ditto");
    let slow = {
        let widget = widget.clone();
        tokio::spawn(async move { widget.refresh().await })
    };

    // Let the slow fetch get in flight, then overtake it.
    tokio::time::sleep(Duration::from_millis(100)).await;
    widget.set_search("pikachu");
    widget.refresh().await;

    slow.await.unwrap();

    let rows = widget.rows();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].name, "pikachu");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_debounced_search_fetches_only_final_value() {
    let server = MockServer::start().await;

    // Only the final value may ever reach the catalog.
    Mock::given(method("GET"))
        .and(path("/pokemon/pikachu"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(pokemon_json(25, "pikachu", 4, 60, &["electric"])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let widget = widget_for(&server);
    let mut search = widget.search_input(Duration::from_millis(50));

    search.submit("p");
    search.submit("pi");
    search.submit("pikachu");

    // Wait out the quiet window plus the fetch.
    for _ in 0..100 {
        if !widget.rows().is_empty() {
            break;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }

    let rows = widget.rows();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].name, "pikachu");
    assert_eq!(widget.query().search_term(), Some("pikachu"));
}

#[tokio::test]
async fn test_load_type_options_populates_filter_choices() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/type"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 2, "next": null, "previous": null,
            "results": [
                { "name": "normal", "url": format!("{}/type/1/", server.uri()) },
                { "name": "electric", "url": format!("{}/type/13/", server.uri()) },
            ],
        })))
        .mount(&server)
        .await;

    let widget = widget_for(&server);
    widget.load_type_options().await;

    assert_eq!(widget.type_options(), vec!["normal", "electric"]);
}
