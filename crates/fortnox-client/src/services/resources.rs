//! Resource declarations.

resource! {
    /// Employee absence, keyed by `(employee_id, date, cause_code)`.
    AbsenceTransaction {
        path: "/absencetransactions",
        service: "AbsenceTransaction",
        collection: "AbsenceTransactions",
        ops: [Retrieve, Create, Update, Destroy],
    }
}

resource! {
    /// Predefined account charts. List only.
    AccountChart {
        path: "/accountcharts",
        service: "AccountChart",
        collection: "AccountCharts",
        ops: [],
    }
}

resource! {
    /// Chart of accounts, keyed by account number.
    Account {
        path: "/accounts",
        service: "Account",
        collection: "Accounts",
        ops: [Retrieve, Create, Update],
    }
}

resource! {
    /// Folders of the file archive.
    ArchiveFolder {
        path: "/archive",
        service: "Folder",
        collection: "Folder",
        ops: [Retrieve, Create, Destroy],
    }
}

resource! {
    /// Files attached to articles, keyed by file id.
    ArticleFileConnection {
        path: "/articlefileconnections",
        service: "ArticleFileConnection",
        collection: "ArticleFileConnections",
        ops: [Retrieve, Create, Destroy],
    }
}

resource! {
    /// Article register, keyed by article number.
    Article {
        path: "/articles",
        service: "Article",
        collection: "Articles",
        persist: ["ArticleNumber", "Description"],
        ops: [Retrieve, Create, Update, Destroy],
    }
}

resource! {
    /// Files attached to assets, keyed by file id.
    AssetFileConnection {
        path: "/assetfileconnections",
        service: "AssetFileConnection",
        collection: "AssetFileConnections",
        ops: [Retrieve, Create, Destroy],
    }
}

resource! {
    /// Fixed assets.
    Asset {
        path: "/assets",
        service: "Asset",
        collection: "Assets",
        ops: [Retrieve, Create, Update, Destroy],
    }
}

resource! {
    /// Asset types.
    AssetType {
        path: "/assets/types",
        service: "AssetType",
        collection: "Types",
        persist: [
            "Number",
            "Description",
            "AccountAssetId",
            "AccountDepreciationId",
            "AccountValueLossId",
            "Type",
        ],
        ops: [Retrieve, Create, Update, Destroy],
    }
}

resource! {
    /// Employee attendance, keyed by `(employee_id, date, cause_code)`.
    AttendanceTransaction {
        path: "/attendancetransactions",
        service: "AttendanceTransaction",
        collection: "AttendanceTransactions",
        ops: [Retrieve, Create, Update, Destroy],
    }
}

resource! {
    /// Contract accruals, keyed by document number.
    ContractAccrual {
        path: "/contractaccruals",
        service: "ContractAccrual",
        collection: "ContractAccruals",
        ops: [Retrieve, Create, Update, Destroy],
    }
}

resource! {
    /// Contracts, keyed by document number.
    Contract {
        path: "/contracts",
        service: "Contract",
        collection: "Contracts",
        ops: [Retrieve, Create, Update],
    }
}

resource! {
    /// Contract templates, keyed by template number.
    ContractTemplate {
        path: "/contracttemplates",
        service: "ContractTemplate",
        collection: "ContractTemplates",
        ops: [Retrieve, Create, Update],
    }
}

resource! {
    /// Cost centers, keyed by code.
    CostCenter {
        path: "/costcenters",
        service: "CostCenter",
        collection: "CostCenters",
        ops: [Retrieve, Create, Update, Destroy],
    }
}

resource! {
    /// Currencies, keyed by code.
    Currency {
        path: "/currencies",
        service: "Currency",
        collection: "Currencies",
        ops: [Retrieve, Create, Update, Destroy],
    }
}

resource! {
    /// Customer register, keyed by customer number.
    Customer {
        path: "/customers",
        service: "Customer",
        collection: "Customers",
        persist: ["Name"],
        ops: [Retrieve, Create, Update, Destroy],
    }
}

resource! {
    /// Employees, keyed by employee id.
    Employee {
        path: "/employees",
        service: "Employee",
        collection: "Employees",
        ops: [Retrieve, Create, Update],
    }
}

resource! {
    /// Expense codes.
    Expense {
        path: "/expenses",
        service: "Expense",
        collection: "Expenses",
        ops: [Retrieve, Create],
    }
}

resource! {
    /// Financial years.
    FinancialYear {
        path: "/financialyears",
        service: "FinancialYear",
        collection: "FinancialYears",
        ops: [Retrieve, Create],
    }
}

resource! {
    /// Folders of the file inbox.
    InboxFolder {
        path: "/inbox",
        service: "Folder",
        collection: "Folder",
        persist: ["Name", "Id"],
        ops: [Retrieve, Create, Update, Destroy],
    }
}

resource! {
    /// Invoice accruals, keyed by invoice number.
    InvoiceAccrual {
        path: "/invoiceaccruals",
        service: "InvoiceAccrual",
        collection: "InvoiceAccruals",
        ops: [Retrieve, Create, Update, Destroy],
    }
}

resource! {
    /// Customer invoice payments.
    InvoicePayment {
        path: "/invoicepayments",
        service: "InvoicePayment",
        collection: "InvoicePayments",
        ops: [Retrieve, Create, Update, Destroy],
    }
}

resource! {
    /// Customer invoices, keyed by document number.
    Invoice {
        path: "/invoices",
        service: "Invoice",
        collection: "Invoices",
        ops: [Retrieve, Create, Update],
    }
}

resource! {
    /// Document labels.
    Label {
        path: "/labels",
        service: "Label",
        collection: "Labels",
        ops: [Retrieve, Create, Update, Destroy],
    }
}

resource! {
    /// The locked accounting period. Read only.
    LockedPeriod {
        path: "/settings/lockedperiod",
        service: "LockedPeriod",
        collection: "LockedPeriod",
        ops: [],
    }
}

resource! {
    /// Modes of payment, keyed by code.
    ModeOfPayment {
        path: "/modesofpayments",
        service: "ModeOfPayment",
        collection: "ModesOfPayments",
        ops: [Retrieve, Create, Update],
    }
}

resource! {
    /// Invoices handed to the Nox Finans service.
    NoxFinansInvoice {
        path: "/noxfinansinvoices",
        service: "NoxFinansInvoice",
        collection: "NoxFinansInvoices",
        ops: [Retrieve, Create, Update, Destroy],
    }
}

resource! {
    /// Offers, keyed by document number.
    Offer {
        path: "/offers",
        service: "Offer",
        collection: "Offers",
        ops: [Retrieve, Create, Update],
    }
}

resource! {
    /// Orders, keyed by document number.
    Order {
        path: "/orders",
        service: "Order",
        collection: "Orders",
        ops: [Retrieve, Create, Update],
    }
}

resource! {
    /// Predefined accounts, keyed by name.
    PreDefinedAccount {
        path: "/predefinedaccounts",
        service: "PreDefinedAccount",
        collection: "PreDefinedAccounts",
        ops: [Retrieve, Update],
    }
}

resource! {
    /// Predefined voucher series, keyed by name.
    PreDefinedVoucherSeries {
        path: "/predefinedvoucherseries",
        service: "PreDefinedVoucherSeries",
        collection: "PreDefinedVoucherSeries",
        ops: [Retrieve, Update],
    }
}

resource! {
    /// Price lists, keyed by code.
    PriceList {
        path: "/pricelists",
        service: "PriceList",
        collection: "PriceLists",
        ops: [Retrieve, Create, Update],
    }
}

resource! {
    /// Article prices, keyed by `(price_list, article_number, from_quantity)`.
    Price {
        path: "/prices",
        service: "Price",
        collection: "Prices",
        ops: [Retrieve, Create, Update, Destroy],
    }
}

resource! {
    /// Print templates. List only.
    PrintTemplate {
        path: "/printtemplates",
        service: "PrintTemplate",
        collection: "PrintTemplates",
        ops: [],
    }
}

resource! {
    /// Projects, keyed by project number.
    Project {
        path: "/projects",
        service: "Project",
        collection: "Projects",
        ops: [Retrieve, Create, Update, Destroy],
    }
}

resource! {
    /// Salary transactions, keyed by salary row.
    SalaryTransaction {
        path: "/salarytransactions",
        service: "SalaryTransaction",
        collection: "SalaryTransactions",
        ops: [Retrieve, Create, Update, Destroy],
    }
}

resource! {
    /// Employee schedule times, keyed by `(employee_id, date)`.
    ScheduleTime {
        path: "/scheduletimes",
        service: "ScheduleTime",
        collection: "ScheduleTimes",
        ops: [Retrieve, Update],
    }
}

resource! {
    /// SIE exports, keyed by SIE type.
    Sie {
        path: "/sie",
        service: "SIE",
        collection: "Sie",
        ops: [Retrieve],
    }
}

resource! {
    /// Supplier invoice accruals, keyed by supplier invoice number.
    SupplierInvoiceAccrual {
        path: "/supplierinvoiceaccruals",
        service: "SupplierInvoiceAccrual",
        collection: "SupplierInvoiceAccruals",
        ops: [Retrieve, Create, Update, Destroy],
    }
}

resource! {
    /// External URLs attached to supplier invoices.
    SupplierInvoiceExternalUrlConnection {
        path: "/supplierinvoiceexternalurlconnections",
        service: "SupplierInvoiceExternalURLConnection",
        collection: "SupplierInvoiceExternalURLConnections",
        ops: [Retrieve, Create, Update, Destroy],
    }
}

resource! {
    /// Files attached to supplier invoices, keyed by file id.
    SupplierInvoiceFileConnection {
        path: "/supplierinvoicefileconnections",
        service: "SupplierInvoiceFileConnection",
        collection: "SupplierInvoiceFileConnections",
        ops: [Retrieve, Create, Destroy],
    }
}

resource! {
    /// Supplier invoice payments.
    SupplierInvoicePayment {
        path: "/supplierinvoicepayments",
        service: "SupplierInvoicePayment",
        collection: "SupplierInvoicePayments",
        ops: [Retrieve, Create, Update, Destroy],
    }
}

resource! {
    /// Supplier invoices, keyed by given number.
    SupplierInvoice {
        path: "/supplierinvoices",
        service: "SupplierInvoice",
        collection: "SupplierInvoices",
        ops: [Retrieve, Create, Update],
    }
}

resource! {
    /// Supplier register, keyed by supplier number.
    Supplier {
        path: "/suppliers",
        service: "Supplier",
        collection: "Suppliers",
        ops: [Retrieve, Create, Update],
    }
}

resource! {
    /// Tax reductions (ROT/RUT).
    TaxReduction {
        path: "/taxreductions",
        service: "TaxReduction",
        collection: "TaxReductions",
        ops: [Retrieve, Create, Update, Destroy],
    }
}

resource! {
    /// Terms of delivery, keyed by code.
    TermsOfDelivery {
        path: "/termsofdeliveries",
        service: "TermsOfDelivery",
        collection: "TermsOfDeliveries",
        ops: [Retrieve, Create, Update],
    }
}

resource! {
    /// Terms of payment, keyed by code.
    TermsOfPayment {
        path: "/termsofpayments",
        service: "TermsOfPayment",
        collection: "TermsOfPayments",
        ops: [Retrieve, Create, Update, Destroy],
    }
}

resource! {
    /// Domains trusted for e-mail sending.
    TrustedEmailDomain {
        path: "/emailtrusteddomains",
        service: "TrustedDomain",
        collection: "TrustedDomains",
        ops: [Retrieve, Create, Destroy],
    }
}

resource! {
    /// Sender addresses trusted for e-mail sending.
    TrustedEmailSender {
        path: "/emailsenders/trusted",
        list_path: "/emailsenders",
        service: "TrustedSender",
        collection: "TrustedSenders",
        ops: [Retrieve, Create, Destroy],
    }
}

resource! {
    /// Units, keyed by code.
    Unit {
        path: "/units",
        service: "Unit",
        collection: "Units",
        ops: [Retrieve, Create, Update, Destroy],
    }
}

resource! {
    /// Files attached to vouchers, keyed by file id.
    VoucherFileConnection {
        path: "/voucherfileconnections",
        service: "VoucherFileConnection",
        collection: "VoucherFileConnections",
        persist: ["FileId", "VoucherNumber", "VoucherSeries"],
        ops: [Retrieve, Create, Destroy],
    }
}

resource! {
    /// Voucher series, keyed by code.
    VoucherSeries {
        path: "/voucherseries",
        service: "VoucherSeries",
        collection: "VoucherSeriesCollection",
        ops: [Retrieve, Create, Update],
    }
}

resource! {
    /// Vouchers. Addressed within a series; see `Service<Voucher>::retrieve_in_series`.
    Voucher {
        path: "/vouchers",
        service: "Voucher",
        collection: "Vouchers",
        ops: [Create],
    }
}

resource! {
    /// Ways of delivery, keyed by code.
    WayOfDelivery {
        path: "/wayofdeliveries",
        service: "WayOfDelivery",
        collection: "WayOfDeliveries",
        ops: [Retrieve, Create, Update, Destroy],
    }
}
