//! Listing, resource actions and wire format round trips.

mod common;

use recurly::resources::{Account, AddOn, Invoice, Money, Plan, Refund, Subscription};
use recurly::{ListParams, WireFormat};
use wiremock::matchers::{body_string, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::{Echo, client, client_with_format};

#[tokio::test]
async fn list_follows_link_header() {
    let server = MockServer::start().await;
    let next = format!("{}/v2/accounts?cursor=1304958672&per_page=2", server.uri());

    Mock::given(method("GET"))
        .and(path("/v2/accounts"))
        .and(query_param("cursor", "1304958672"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("X-Records", "3")
                .set_body_string(
                    r#"<accounts type="array"><account><account_code>c</account_code></account></accounts>"#,
                ),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v2/accounts"))
        .and(query_param("per_page", "2"))
        .and(query_param("state", "active"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("X-Records", "3")
                .insert_header("Link", format!(r#"<{next}>; rel="next""#).as_str())
                .set_body_string(
                    r#"<accounts type="array">
  <account><account_code>a</account_code></account>
  <account><account_code>b</account_code></account>
</accounts>"#,
                ),
        )
        .up_to_n_times(1)
        .mount(&server)
        .await;

    let client = client(&server);
    let first = client
        .list::<Account>(&ListParams::default().per_page(2).state("active"))
        .await
        .unwrap();
    assert_eq!(first.total, Some(3));
    assert_eq!(first.items.len(), 2);
    assert_eq!(first.items[0].uri().unwrap().to_string(), "accounts/a");
    assert!(first.has_next());

    let second = client.next_page(&first).await.unwrap().unwrap();
    assert_eq!(second.items.len(), 1);
    assert_eq!(second.items[0].account_code.as_deref(), Some("c"));
    assert!(!second.has_next());
    assert!(client.next_page(&second).await.unwrap().is_none());
}

#[tokio::test]
async fn empty_list_body_is_empty_page() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/plans"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let page = client(&server)
        .list::<Plan>(&ListParams::default())
        .await
        .unwrap();
    assert!(page.items.is_empty());
    assert_eq!(page.total, None);
}

fn subscription_xml(state: &str) -> String {
    format!(
        r#"<subscription href="https://api.recurly.com/v2/subscriptions/44f83d7cba354d5b84812419f923ea96">
  <uuid>44f83d7cba354d5b84812419f923ea96</uuid>
  <state>{state}</state>
  <plan_code>gold</plan_code>
  <currency>USD</currency>
  <quantity type="integer">1</quantity>
  <unit_amount_in_cents type="integer">7900</unit_amount_in_cents>
  <activated_at type="datetime">2011-05-27T07:00:00Z</activated_at>
</subscription>"#
    )
}

#[tokio::test]
async fn subscription_lifecycle() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v2/subscriptions"))
        .and(body_string(
            "<subscription><plan_code>gold</plan_code>\
             <account><account_code>verena</account_code></account>\
             <currency>USD</currency></subscription>",
        ))
        .respond_with(ResponseTemplate::new(201).set_body_string(subscription_xml("active")))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/v2/subscriptions/44f83d7cba354d5b84812419f923ea96/cancel"))
        .respond_with(ResponseTemplate::new(200).set_body_string(subscription_xml("canceled")))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/v2/subscriptions/44f83d7cba354d5b84812419f923ea96/reactivate"))
        .respond_with(ResponseTemplate::new(200).set_body_string(subscription_xml("active")))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/v2/subscriptions/44f83d7cba354d5b84812419f923ea96/terminate"))
        .and(query_param("refund", "partial"))
        .respond_with(ResponseTemplate::new(200).set_body_string(subscription_xml("expired")))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    let mut subscription = client
        .create_strict(Subscription {
            plan_code: Some("gold".to_string()),
            currency: Some("USD".to_string()),
            account: Some(Account::new("verena")),
            ..Subscription::default()
        })
        .await
        .unwrap();
    assert_eq!(
        subscription.uri().unwrap().to_string(),
        "subscriptions/44f83d7cba354d5b84812419f923ea96"
    );
    assert!(subscription.activated_at.is_some());

    subscription.cancel(&client).await.unwrap();
    assert_eq!(subscription.state.as_deref(), Some("canceled"));

    subscription.reactivate(&client).await.unwrap();
    assert_eq!(subscription.state.as_deref(), Some("active"));

    subscription.terminate(&client, Refund::Partial).await.unwrap();
    assert_eq!(subscription.state.as_deref(), Some("expired"));
}

#[tokio::test]
async fn invoice_can_be_marked_paid_or_failed() {
    let server = MockServer::start().await;

    let invoice_xml = |state: &str| {
        format!(
            "<invoice><invoice_number type=\"integer\">1005</invoice_number>\
             <state>{state}</state><total_in_cents type=\"integer\">7900</total_in_cents></invoice>"
        )
    };
    Mock::given(method("GET"))
        .and(path("/v2/invoices/1005"))
        .respond_with(ResponseTemplate::new(200).set_body_string(invoice_xml("past_due")))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/v2/invoices/1005/mark_successful"))
        .respond_with(ResponseTemplate::new(200).set_body_string(invoice_xml("paid")))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/v2/invoices/1005/mark_failed"))
        .respond_with(ResponseTemplate::new(200).set_body_string(invoice_xml("failed")))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    let mut invoice = client.find::<Invoice>("1005").await.unwrap();

    invoice.mark_successful(&client).await.unwrap();
    assert_eq!(invoice.state.as_deref(), Some("paid"));

    invoice.mark_failed(&client).await.unwrap();
    assert_eq!(invoice.state.as_deref(), Some("failed"));
}

#[tokio::test]
async fn add_ons_are_listed_under_their_plan() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/plans/gold"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            "<plan><plan_code>gold</plan_code><name>The Gold Plan</name></plan>",
        ))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v2/plans/gold/add_ons"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            "<add_ons type=\"array\"><add_on><add_on_code>extra_seat</add_on_code>\
             <name>Extra seat</name>\
             <unit_amount_in_cents><USD>500</USD></unit_amount_in_cents></add_on></add_ons>",
        ))
        .mount(&server)
        .await;

    let client = client(&server);
    let plan = client.find::<Plan>("gold").await.unwrap();
    let add_ons = client.has_many::<Plan, AddOn>(&plan).await.unwrap();

    assert_eq!(add_ons.len(), 1);
    assert_eq!(
        add_ons[0].uri().unwrap().to_string(),
        "plans/gold/add_ons/extra_seat"
    );
    assert_eq!(
        add_ons[0].unit_amount_in_cents.as_ref().unwrap().get("USD"),
        Some(500)
    );
}

fn gold_plan() -> Plan {
    Plan {
        name: Some("The Gold Plan".to_string()),
        description: Some("The Gold Plan is for folks who love gold.".to_string()),
        accounting_code: Some("gold_plan_acc_code".to_string()),
        setup_fee_accounting_code: Some("setup_fee_ac".to_string()),
        unit_amount_in_cents: Some(Money::new("USD", 79_00)),
        setup_fee_in_cents: Some(Money::new("USD", 60_00)),
        plan_interval_length: Some(1),
        plan_interval_unit: Some("months".to_string()),
        tax_exempt: Some(false),
        revenue_schedule_type: Some("evenly".to_string()),
        avalara_transaction_type: Some(600),
        avalara_service_type: Some(3),
        ..Plan::new("gold")
    }
}

#[tokio::test]
async fn plan_round_trips_through_xml_and_json() {
    for format in [WireFormat::Xml, WireFormat::Json] {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v2/plans"))
            .and(header("content-type", format.content_type()))
            .respond_with(Echo)
            .expect(1)
            .mount(&server)
            .await;

        let client = client_with_format(&server, format);
        let plan = client.create_strict(gold_plan()).await.unwrap();

        assert_eq!(plan.attributes(), &gold_plan(), "{format} round trip");
        assert_eq!(plan.uri().unwrap().to_string(), "plans/gold");
    }
}

#[tokio::test]
async fn reload_discards_local_edits_and_destroy_deletes() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/plans/gold"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            "<plan><plan_code>gold</plan_code><name>The Gold Plan</name></plan>",
        ))
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/v2/plans/gold"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    let mut plan = client.find::<Plan>("gold").await.unwrap();
    plan.name = Some("Edited".to_string());
    assert!(plan.is_changed("name"));

    client.reload(&mut plan).await.unwrap();
    assert_eq!(plan.name.as_deref(), Some("The Gold Plan"));
    assert!(plan.changed().is_empty());

    client.destroy(&mut plan).await.unwrap();
    assert!(plan.is_destroyed());
    assert!(!plan.is_persisted());
}
