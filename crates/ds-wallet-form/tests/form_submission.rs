use async_trait::async_trait;
use ds_wallet_form::{
    AddWalletRequest, AddWalletResponse, ApiError, FieldUpdate, Highlight, SubmitOutcome,
    WalletApi, WalletForm, submit_form,
};
use std::cell::RefCell;

#[derive(Default)]
struct RecordingApi {
    calls: RefCell<Vec<AddWalletRequest>>,
    fail: bool,
}

#[async_trait(?Send)]
impl WalletApi for RecordingApi {
    async fn add_wallet(&self, request: &AddWalletRequest) -> Result<AddWalletResponse, ApiError> {
        self.calls.borrow_mut().push(request.clone());
        if self.fail {
            return Err(ApiError::Transport("connection refused".to_owned()));
        }
        Ok(AddWalletResponse {
            accepted: true,
            registration_id: "reg-1".to_owned(),
            wallet_address: request.wallet_address.clone(),
            wallet_chain_id: request.wallet_chain_id,
            chain_name: "Ethereum Mainnet".to_owned(),
        })
    }
}

fn edit(form: &mut WalletForm, name: &str, value: &str) {
    form.apply(FieldUpdate::from_raw(name, value).expect("known field"));
}

fn filled_form() -> WalletForm {
    let mut form = WalletForm::new();
    edit(&mut form, "address", "0xAbC123");
    edit(&mut form, "chainId", "1");
    edit(&mut form, "tag", "cold storage");
    edit(&mut form, "highlight", "yellow");
    form
}

#[tokio::test]
async fn valid_input_sends_exactly_one_call() {
    let api = RecordingApi::default();
    let mut form = filled_form();
    let errors_before = form.errors().clone();

    let outcome = submit_form(form.submit(), &api).await;

    assert!(matches!(outcome, SubmitOutcome::Sent(Ok(_))));
    assert_eq!(
        api.calls.borrow().as_slice(),
        &[AddWalletRequest {
            wallet_address: "0xAbC123".to_owned(),
            wallet_chain_id: 1,
            wallet_tag: "cold storage".to_owned(),
            wallet_highlight: Highlight::Yellow,
        }]
    );
    assert_eq!(form.errors(), &errors_before);
}

#[tokio::test]
async fn bad_address_blocks_the_call() {
    for address in ["abc", "0xZZ"] {
        let api = RecordingApi::default();
        let mut form = filled_form();
        edit(&mut form, "address", address);

        let outcome = submit_form(form.submit(), &api).await;

        assert_eq!(outcome, SubmitOutcome::Invalid);
        assert_eq!(form.errors().address, "Invalid address");
        assert_eq!(form.errors().tag, "");
        assert!(api.calls.borrow().is_empty());
    }
}

#[tokio::test]
async fn tag_length_bounds_block_the_call() {
    let api = RecordingApi::default();

    let mut empty = filled_form();
    edit(&mut empty, "tag", "");
    assert_eq!(submit_form(empty.submit(), &api).await, SubmitOutcome::Invalid);
    assert_eq!(empty.errors().tag, "Please define a tag.");

    let mut long = filled_form();
    edit(&mut long, "tag", &"x".repeat(21));
    assert_eq!(submit_form(long.submit(), &api).await, SubmitOutcome::Invalid);
    assert!(!long.errors().tag.is_empty());

    assert!(api.calls.borrow().is_empty());
}

#[tokio::test]
async fn default_form_reports_address_and_tag() {
    let api = RecordingApi::default();
    let mut form = WalletForm::new();

    assert_eq!(submit_form(form.submit(), &api).await, SubmitOutcome::Invalid);
    assert_eq!(form.errors().address, "Invalid address");
    assert_eq!(form.errors().tag, "Please define a tag.");
    assert!(api.calls.borrow().is_empty());
}

#[tokio::test]
async fn editing_clears_only_that_fields_message() {
    let api = RecordingApi::default();
    let mut form = WalletForm::new();
    submit_form(form.submit(), &api).await;

    edit(&mut form, "tag", "t");
    assert_eq!(form.errors().tag, "");
    assert_eq!(form.errors().address, "Invalid address");

    edit(&mut form, "chainId", "56");
    edit(&mut form, "highlight", "blue");
    assert_eq!(form.errors().address, "Invalid address");
    assert_eq!(form.info().chain_id, 56);
}

#[tokio::test]
async fn remote_failure_leaves_form_untouched() {
    let api = RecordingApi {
        fail: true,
        ..RecordingApi::default()
    };
    let mut form = filled_form();
    let before = form.clone();

    let outcome = submit_form(form.submit(), &api).await;

    assert!(matches!(outcome, SubmitOutcome::Sent(Err(ApiError::Transport(_)))));
    assert_eq!(api.calls.borrow().len(), 1);
    assert_eq!(form, before);
}

#[tokio::test]
async fn unlisted_highlight_is_rejected_without_display() {
    let api = RecordingApi::default();
    let mut form = filled_form();
    form.apply(FieldUpdate::Highlight("purple".to_owned()));

    assert_eq!(submit_form(form.submit(), &api).await, SubmitOutcome::Invalid);
    assert!(form.errors().is_clear());
    assert!(api.calls.borrow().is_empty());
}

#[tokio::test]
async fn edits_after_submit_do_not_change_the_sent_request() {
    let api = RecordingApi::default();
    let mut form = filled_form();

    let attempt = form.submit();
    edit(&mut form, "tag", "renamed");
    let outcome = submit_form(attempt, &api).await;

    assert!(matches!(outcome, SubmitOutcome::Sent(Ok(_))));
    assert_eq!(api.calls.borrow()[0].wallet_tag, "cold storage");
    assert_eq!(form.info().tag, "renamed");
}

#[tokio::test]
async fn tag_over_twenty_utf16_units_blocks_the_call() {
    let api = RecordingApi::default();
    let mut form = filled_form();
    edit(&mut form, "tag", &"\u{1F600}".repeat(11));

    assert_eq!(submit_form(form.submit(), &api).await, SubmitOutcome::Invalid);
    assert_eq!(form.errors().tag, "String must contain at most 20 character(s)");
    assert!(api.calls.borrow().is_empty());
}
