//! Dunning campaign lookup and plan bulk update.

mod common;

use recurly::resources::{DunningCampaign, Plan};
use wiremock::matchers::{body_string, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::client;

const CAMPAIGN_ID: &str = "abcdef1234567890";

fn campaign_xml(name: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<dunning_campaign href="https://api.recurly.com/v2/dunning_campaigns/{CAMPAIGN_ID}">
  <id>{CAMPAIGN_ID}</id>
  <code>default_campaign</code>
  <name>{name}</name>
  <description>Used for every plan unless assigned otherwise</description>
  <default type="boolean">true</default>
  <dunning_cycles type="array">
    <dunning_cycle>
      <type>automatic</type>
      <applies_to_manual_trial type="boolean">false</applies_to_manual_trial>
      <first_communication_interval type="integer">2</first_communication_interval>
      <send_immediately_on_hard_decline type="boolean">false</send_immediately_on_hard_decline>
      <intervals type="array">
        <interval><days type="integer">2</days><email_template>payment_failed</email_template></interval>
      </intervals>
      <expire_subscription type="boolean">true</expire_subscription>
      <fail_invoice type="boolean">true</fail_invoice>
      <total_dunning_days type="integer">30</total_dunning_days>
      <total_recycling_days type="integer">30</total_recycling_days>
      <version type="integer">1</version>
    </dunning_cycle>
  </dunning_cycles>
  <created_at type="datetime">2020-06-01T00:00:00Z</created_at>
  <updated_at type="datetime">2020-06-01T00:00:00Z</updated_at>
  <deleted_at nil="nil"/>
</dunning_campaign>"#
    )
}

fn plan_xml(code: &str, name: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<plan href="https://api.recurly.com/v2/plans/{code}">
  <plan_code>{code}</plan_code>
  <name>{name}</name>
  <unit_amount_in_cents><USD type="integer">7900</USD></unit_amount_in_cents>
  <setup_fee_in_cents><USD type="integer">6000</USD></setup_fee_in_cents>
  <plan_interval_length type="integer">1</plan_interval_length>
  <plan_interval_unit>months</plan_interval_unit>
  <tax_exempt type="boolean">false</tax_exempt>
  <revenue_schedule_type>evenly</revenue_schedule_type>
  <avalara_transaction_type type="integer">600</avalara_transaction_type>
  <avalara_service_type type="integer">3</avalara_service_type>
  <dunning_campaign_id>{CAMPAIGN_ID}</dunning_campaign_id>
  <trial_interval_length nil="nil"></trial_interval_length>
  <tax_code nil="nil"></tax_code>
</plan>"#
    )
}

async fn mount_campaign(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path(format!("/v2/dunning_campaigns/{CAMPAIGN_ID}")))
        .respond_with(ResponseTemplate::new(200).set_body_string(campaign_xml("Default Campaign")))
        .mount(server)
        .await;
}

#[tokio::test]
async fn find_returns_campaign() {
    let server = MockServer::start().await;
    mount_campaign(&server).await;

    let campaign = client(&server)
        .find::<DunningCampaign>(CAMPAIGN_ID)
        .await
        .unwrap();

    assert_eq!(campaign.id.as_deref(), Some(CAMPAIGN_ID));
    assert_eq!(campaign.default, Some(true));
    assert_eq!(campaign.deleted_at, None);
    let cycles = campaign.dunning_cycles.as_ref().unwrap();
    assert_eq!(cycles.len(), 1);
    assert_eq!(cycles.items()[0].total_dunning_days, Some(30));
}

#[tokio::test]
async fn bulk_update_assigns_campaign_to_plans() {
    let server = MockServer::start().await;
    mount_campaign(&server).await;

    Mock::given(method("PUT"))
        .and(path(format!("/v2/dunning_campaigns/{CAMPAIGN_ID}/bulk_update")))
        .and(body_string(
            "<dunning_campaign><plan_codes><plan_code>gold</plan_code>\
             <plan_code>silver</plan_code></plan_codes></dunning_campaign>",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_string(campaign_xml("Renamed Campaign")))
        .expect(1)
        .mount(&server)
        .await;
    for (code, name) in [("gold", "The Gold Plan"), ("silver", "The Silver Plan")] {
        Mock::given(method("GET"))
            .and(path(format!("/v2/plans/{code}")))
            .respond_with(ResponseTemplate::new(200).set_body_string(plan_xml(code, name)))
            .mount(&server)
            .await;
    }

    let client = client(&server);
    let mut campaign = client
        .find::<DunningCampaign>(CAMPAIGN_ID)
        .await
        .unwrap();

    campaign
        .bulk_update(&client, ["gold", "silver"])
        .await
        .unwrap();
    // Reloaded from the response body.
    assert_eq!(campaign.name.as_deref(), Some("Renamed Campaign"));
    assert!(campaign.changed().is_empty());

    for code in ["gold", "silver"] {
        let plan = client.find::<Plan>(code).await.unwrap();
        assert_eq!(plan.dunning_campaign_id, campaign.id);
        assert_eq!(plan.unit_amount_in_cents.as_ref().unwrap().get("USD"), Some(79_00));
        assert_eq!(plan.avalara_transaction_type, Some(600));
        assert_eq!(plan.trial_interval_length, None);
        assert_eq!(plan.tax_code, None);
    }
}

#[tokio::test]
async fn bulk_update_with_empty_response_keeps_campaign() {
    let server = MockServer::start().await;
    mount_campaign(&server).await;

    Mock::given(method("PUT"))
        .and(path(format!("/v2/dunning_campaigns/{CAMPAIGN_ID}/bulk_update")))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    let mut campaign = client
        .find::<DunningCampaign>(CAMPAIGN_ID)
        .await
        .unwrap();
    campaign.bulk_update(&client, ["gold"]).await.unwrap();

    assert_eq!(campaign.name.as_deref(), Some("Default Campaign"));
}
