/*
[INPUT]:  Account queries, deposit and withdrawal requests
[OUTPUT]: Account data (balances, transactions, addresses, trades, fees)
[POS]:    HTTP layer - account endpoints (require signed POST)
[UPDATE]: When adding new account endpoints or changing parameters
*/

// ### Account Endpoints

use serde_json::Value;

use crate::http::{IrClient, Result};
use crate::types::{
    AccountsRequest, BrokerageFeesRequest, DepositAddressRequest, DepositAddressesQuery,
    DigitalWithdrawalRequest, FiatWithdrawalRequest, SyncDepositAddressRequest, TradesQuery,
    TransactionsQuery,
};

impl IrClient {
    /// List accounts and balances
    ///
    /// POST /Private/GetAccounts
    pub async fn get_accounts(&self) -> Result<Value> {
        self.post_private(&AccountsRequest).await
    }

    /// Transaction history for one account
    ///
    /// POST /Private/GetTransactions
    pub async fn get_transactions(&self, query: &TransactionsQuery) -> Result<Value> {
        self.post_private(query).await
    }

    /// Deposit address for a digital currency
    ///
    /// POST /Private/GetDigitalCurrencyDepositAddress
    pub async fn get_digital_currency_deposit_address(&self, primary: &str) -> Result<Value> {
        let req = DepositAddressRequest {
            primary_currency_code: primary.to_string(),
        };
        self.post_private(&req).await
    }

    /// Page of deposit addresses for a digital currency
    ///
    /// POST /Private/GetDigitalCurrencyDepositAddresses
    pub async fn get_digital_currency_deposit_addresses(
        &self,
        query: &DepositAddressesQuery,
    ) -> Result<Value> {
        self.post_private(query).await
    }

    /// Ask the exchange to rescan the blockchain for a deposit address
    ///
    /// POST /Private/SynchDigitalCurrencyDepositAddressWithBlockchain
    pub async fn synch_digital_currency_deposit_address_with_blockchain(
        &self,
        deposit_address: &str,
    ) -> Result<Value> {
        let req = SyncDepositAddressRequest {
            deposit_address: deposit_address.to_string(),
        };
        self.post_private(&req).await
    }

    /// POST /Private/WithdrawDigitalCurrency
    pub async fn withdraw_digital_currency(&self, req: &DigitalWithdrawalRequest) -> Result<Value> {
        self.post_private(req).await
    }

    /// POST /Private/RequestFiatWithdrawal
    pub async fn request_fiat_withdrawal(&self, req: &FiatWithdrawalRequest) -> Result<Value> {
        self.post_private(req).await
    }

    /// Executed trades, newest first
    ///
    /// POST /Private/GetTrades
    pub async fn get_trades(&self, query: &TradesQuery) -> Result<Value> {
        self.post_private(query).await
    }

    /// POST /Private/GetBrokerageFees
    pub async fn get_brokerage_fees(&self) -> Result<Value> {
        self.post_private(&BrokerageFeesRequest).await
    }
}
