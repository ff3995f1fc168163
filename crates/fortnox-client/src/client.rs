//! Client registry.

use std::sync::Arc;

use fortnox_core::Record;

use crate::config::Configuration;
use crate::error::ClientError;
use crate::http::HttpClient;
use crate::services::{
    into_record, AbsenceTransaction, AccessTokenService, Account, AccountChart, ArchiveFolder,
    Article, ArticleFileConnection, Asset, AssetFileConnection, AssetType, AttendanceTransaction,
    Contract, ContractAccrual, ContractTemplate, CostCenter, Currency, Customer, Employee,
    Expense, FinancialYear, InboxFolder, Invoice, InvoiceAccrual, InvoicePayment, Label,
    LockedPeriod, ModeOfPayment, NoxFinansInvoice, Offer, Order, PreDefinedAccount,
    PreDefinedVoucherSeries, Price, PriceList, PrintTemplate, Project, SalaryTransaction,
    ScheduleTime, Service, Sie, Supplier, SupplierInvoice, SupplierInvoiceAccrual,
    SupplierInvoiceExternalUrlConnection, SupplierInvoiceFileConnection, SupplierInvoicePayment,
    TaxReduction, TermsOfDelivery, TermsOfPayment, TrustedEmailDomain, TrustedEmailSender, Unit,
    Voucher, VoucherFileConnection, VoucherSeries, WayOfDelivery,
};

/// Generate one accessor per resource service.
macro_rules! accessors {
    ($($method:ident => $resource:ty),* $(,)?) => {
        $(
            #[doc = concat!("Service for [`", stringify!($resource), "`].")]
            #[must_use]
            pub fn $method(&self) -> Service<$resource> {
                Service::new(self.http.clone())
            }
        )*
    };
}

/// Entry point of the Fortnox API.
///
/// Built once from a validated configuration; every service shares the
/// same transport.
///
/// ```no_run
/// use fortnox_client::{Attributes, Client, Configuration};
///
/// # async fn example() -> Result<(), fortnox_client::ClientError> {
/// let client = Client::new(
///     Configuration::from_env()?.with_base_url("https://api.fortnox.se"),
/// )?;
///
/// let customer = client
///     .customers()
///     .create(Attributes::new().with("Name", "Acme"))
///     .await?;
/// println!("created {:?}", customer.str("CustomerNumber"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Client {
    http: HttpClient,
}

impl Client {
    /// Validate `config` and build a client.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Configuration`] if the configuration is invalid.
    pub fn new(config: Configuration) -> Result<Self, ClientError> {
        Ok(Self {
            http: HttpClient::from_shared(Arc::new(config))?,
        })
    }

    /// The shared transport, for calls without a dedicated service.
    #[must_use]
    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    /// The configuration this client was built from.
    #[must_use]
    pub fn config(&self) -> &Configuration {
        self.http.config()
    }

    /// Token issuance.
    #[must_use]
    pub fn access_tokens(&self) -> AccessTokenService {
        AccessTokenService::new(self.http.clone())
    }

    /// Company name, address and registration details.
    ///
    /// # Errors
    ///
    /// Returns a classified error for non-2xx responses, or a transport error.
    pub async fn company_information(&self) -> Result<Record, ClientError> {
        let response = self.http.get("/companyinformation", None).await?;
        Ok(into_record(response.body))
    }

    /// Company-wide settings.
    ///
    /// # Errors
    ///
    /// Returns a classified error for non-2xx responses, or a transport error.
    pub async fn company_settings(&self) -> Result<Record, ClientError> {
        let response = self.http.get("/settings/company", None).await?;
        Ok(into_record(response.body))
    }

    accessors! {
        absence_transactions => AbsenceTransaction,
        account_charts => AccountChart,
        accounts => Account,
        archive => ArchiveFolder,
        article_file_connections => ArticleFileConnection,
        articles => Article,
        asset_file_connections => AssetFileConnection,
        assets => Asset,
        asset_types => AssetType,
        attendance_transactions => AttendanceTransaction,
        contract_accruals => ContractAccrual,
        contracts => Contract,
        contract_templates => ContractTemplate,
        cost_centers => CostCenter,
        currencies => Currency,
        customers => Customer,
        employees => Employee,
        expenses => Expense,
        financial_years => FinancialYear,
        inbox => InboxFolder,
        invoice_accruals => InvoiceAccrual,
        invoice_payments => InvoicePayment,
        invoices => Invoice,
        labels => Label,
        locked_period => LockedPeriod,
        modes_of_payment => ModeOfPayment,
        nox_finans_invoices => NoxFinansInvoice,
        offers => Offer,
        orders => Order,
        predefined_accounts => PreDefinedAccount,
        predefined_voucher_series => PreDefinedVoucherSeries,
        price_lists => PriceList,
        prices => Price,
        print_templates => PrintTemplate,
        projects => Project,
        salary_transactions => SalaryTransaction,
        schedule_times => ScheduleTime,
        sie => Sie,
        supplier_invoice_accruals => SupplierInvoiceAccrual,
        supplier_invoice_external_url_connections => SupplierInvoiceExternalUrlConnection,
        supplier_invoice_file_connections => SupplierInvoiceFileConnection,
        supplier_invoice_payments => SupplierInvoicePayment,
        supplier_invoices => SupplierInvoice,
        suppliers => Supplier,
        tax_reductions => TaxReduction,
        terms_of_deliveries => TermsOfDelivery,
        terms_of_payments => TermsOfPayment,
        trusted_email_domains => TrustedEmailDomain,
        trusted_email_senders => TrustedEmailSender,
        units => Unit,
        voucher_file_connections => VoucherFileConnection,
        voucher_series => VoucherSeries,
        vouchers => Voucher,
        ways_of_delivery => WayOfDelivery,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_validates_configuration() {
        let err = Client::new(Configuration::new()).unwrap_err();
        assert!(matches!(err, ClientError::Configuration(_)));
    }

    #[test]
    fn services_share_configuration() {
        let client = Client::new(
            Configuration::new()
                .with_access_token("tok")
                .with_client_secret("sec")
                .with_timeout(5),
        )
        .unwrap();
        assert_eq!(client.customers().http().config().timeout, 5);
        assert_eq!(client.config().base_url, "https://api.fortnox.se");
    }
}
