use bank_api::endpoints::{
    GroupId,
    trade::{Resource, TradeType},
};
use bank_api::{BankApiError, Client, DEFAULT_BASE_URL, Request};

#[tokio::main]
pub async fn main() -> Result<(), BankApiError> {
    let client = Client::new(DEFAULT_BASE_URL);
    let group = Request::group(GroupId::new(1));

    let res = client
        .send(group.trade(Resource::Wood, 10).kind(TradeType::Sell))
        .await?;
    println!("{}", res.message);

    for record in client.send(group.transactions()).await? {
        println!("{record}");
    }
    Ok(())
}
