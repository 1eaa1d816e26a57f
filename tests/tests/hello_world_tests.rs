use alloy::primitives::B256;
use anyhow::Result;
use ballot_bindings::{format_bytes32_string, parse_bytes32_string};
use tests::{assert_reverted_with, confirm, HelloWorldContract, TestNode};

async fn text(contract: &HelloWorldContract) -> Result<String> {
    Ok(parse_bytes32_string(contract.helloWorld().call().await?)?)
}

fn bytes32(text: &str) -> B256 {
    format_bytes32_string(text).expect("test strings fit in bytes32")
}

#[tokio::test]
#[ignore = "needs anvil and forge artifacts"]
async fn should_give_a_hello_world() -> Result<()> {
    let node = TestNode::start().await?;
    let contract = node.deploy_hello_world().await?;

    assert_eq!(text(&contract).await?, "Hello World");
    Ok(())
}

#[tokio::test]
#[ignore = "needs anvil and forge artifacts"]
async fn should_set_owner_to_deployer_account() -> Result<()> {
    let node = TestNode::start().await?;
    let contract = node.deploy_hello_world().await?;

    assert_eq!(contract.owner().call().await?, node.deployer());
    Ok(())
}

#[tokio::test]
#[ignore = "needs anvil and forge artifacts"]
async fn should_not_allow_anyone_other_than_owner_to_call_transfer_ownership() -> Result<()> {
    let node = TestNode::start().await?;
    let contract = node.deploy_hello_world().await?;
    let stranger = node.accounts[1];

    let sent = contract.transferOwnership(stranger).from(stranger).send().await;

    assert_reverted_with(confirm(sent).await, "Caller is not the owner");
    assert_eq!(contract.owner().call().await?, node.deployer());
    Ok(())
}

#[tokio::test]
#[ignore = "needs anvil and forge artifacts"]
async fn owner_can_transfer_ownership() -> Result<()> {
    let node = TestNode::start().await?;
    let contract = node.deploy_hello_world().await?;
    let new_owner = node.accounts[1];

    confirm(contract.transferOwnership(new_owner).from(node.deployer()).send().await).await?;

    assert_eq!(contract.owner().call().await?, new_owner);
    let sent = contract.setText(bytes32("Old owner")).from(node.deployer()).send().await;
    assert_reverted_with(confirm(sent).await, "Caller is not the owner");
    Ok(())
}

#[tokio::test]
#[ignore = "needs anvil and forge artifacts"]
async fn should_change_text_correctly() -> Result<()> {
    let node = TestNode::start().await?;
    let contract = node.deploy_hello_world().await?;

    confirm(contract.setText(bytes32("Something New!")).from(node.deployer()).send().await)
        .await?;

    assert_eq!(text(&contract).await?, "Something New!");
    Ok(())
}

#[tokio::test]
#[ignore = "needs anvil and forge artifacts"]
async fn should_not_allow_anyone_other_than_owner_to_change_text() -> Result<()> {
    let node = TestNode::start().await?;
    let contract = node.deploy_hello_world().await?;

    let sent = contract.setText(bytes32("Failure")).from(node.accounts[1]).send().await;

    assert_reverted_with(confirm(sent).await, "Caller is not the owner");
    assert_eq!(text(&contract).await?, "Hello World");
    Ok(())
}
