#![allow(dead_code)]

use recurly::{ApiClient, Config, WireFormat};
use url::Url;
use wiremock::{MockServer, Request, Respond, ResponseTemplate};

pub const API_KEY: &str = "test-key";

/// `Authorization` value for [`API_KEY`].
pub const BASIC_AUTH: &str = "Basic dGVzdC1rZXk6";

pub fn client(server: &MockServer) -> ApiClient {
    client_with_format(server, WireFormat::Xml)
}

pub fn client_with_format(server: &MockServer, format: WireFormat) -> ApiClient {
    let base_url = Url::parse(&format!("{}/v2/", server.uri())).unwrap();
    ApiClient::builder(Config::new(API_KEY))
        .base_url(base_url)
        .format(format)
        .build()
        .unwrap()
}

/// Answers with the request body, as a server that accepted it unchanged.
pub struct Echo;

impl Respond for Echo {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        ResponseTemplate::new(201).set_body_bytes(request.body.clone())
    }
}

pub fn account_xml(code: &str, state: &str, last_name: &str, company_name: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<account href="https://api.recurly.com/v2/accounts/{code}">
  <adjustments href="https://api.recurly.com/v2/accounts/{code}/adjustments"/>
  <billing_info href="https://api.recurly.com/v2/accounts/{code}/billing_info"/>
  <account_code>{code}</account_code>
  <state>{state}</state>
  <email>verena@example.com</email>
  <first_name>Verena</first_name>
  <last_name>{last_name}</last_name>
  <company_name>{company_name}</company_name>
  <tax_exempt type="boolean">false</tax_exempt>
  <vat_number nil="nil"></vat_number>
  <hosted_login_token>a92468579e9c4231a6c0031c4716c01d</hosted_login_token>
  <balance_in_cents type="integer">0</balance_in_cents>
  <created_at type="datetime">2011-10-25T12:00:00Z</created_at>
  <closed_at nil="nil"></closed_at>
</account>"#
    )
}
