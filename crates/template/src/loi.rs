//! Letter of Intent template
//!
//! [`assemble`] merges form values into the fixed clause sequence. It knows
//! nothing about pages; every field is optional and a bracketed placeholder
//! stands in for anything not provided.

use crate::{FieldName, FieldValues};
use layout::Block;

/// Document title, also written to the PDF Info dictionary
pub const DOCUMENT_TITLE: &str = "Letter of Intent to Purchase Real Property";

const SIGNATURE_RULE: &str = "By: ___________________________";

/// Build the block sequence for one Letter of Intent
///
/// Order is fixed: title, date, To, From, Re, the 13 numbered clauses, then
/// the buyer and seller signature blocks. Identical input always yields an
/// identical sequence.
pub fn assemble(fields: &FieldValues) -> Vec<Block> {
    use FieldName::*;

    let v = |name: FieldName, placeholder: &'static str| -> String {
        fields.value_or(name, placeholder).to_string()
    };

    let mut doc = LoiBuilder::default();

    doc.title(DOCUMENT_TITLE);
    doc.space(0.2);

    doc.line(v(Date, "[Date]"));
    doc.space(0.2);

    let mut to = format!("To: {}", v(SellerName, "[Seller's Name]"));
    if let Some(company) = fields.get(SellerCompany) {
        to.push(' ');
        to.push_str(company);
    }
    to.push(' ');
    to.push_str(fields.value_or(SellerAddress, "[Seller's Address]"));
    doc.line(to);
    doc.space(0.2);

    doc.line(format!(
        "From: {} {}",
        v(BuyerName, "[Buyer's Name / Entity]"),
        v(BuyerAddress, "[Buyer's Address]")
    ));
    doc.space(0.2);

    // Property name wins over the address
    let property_ref = fields
        .get(PropertyName)
        .unwrap_or_else(|| fields.value_or(PropertyAddress, "[Property Name or Address]"));
    doc.line(format!("Re: Letter of Intent to Purchase {property_ref}"));
    doc.space(0.3);

    doc.clause(
        "1. Introduction",
        format!(
            "This Letter of Intent (\"LOI\") sets forth the general terms and conditions under \
             which {} (\"Buyer\") proposes to purchase the property commonly known as {} (the \
             \"Property\") from {} (\"Seller\"). The terms below are intended solely as a basis \
             for further negotiation and are not intended to be binding upon either party except \
             as specifically noted.",
            v(BuyerName, "[Buyer Name / Entity]"),
            v(PropertyAddress, "[Property Address]"),
            v(SellerName, "[Seller Name]"),
        ),
    );
    doc.space(0.1);

    doc.clause(
        "2. Property Description",
        format!(
            "The Property consists of {}, identified as {}, and located at {}.",
            v(PropertyDescription, "[# units / square footage / acreage]"),
            v(
                PropertyType,
                "[Property Type: multifamily, retail, mixed-use, etc.]"
            ),
            v(PropertyAddress, "[full legal address, city, state, ZIP]"),
        ),
    );
    doc.space(0.1);

    // Currency values are trusted verbatim after the `$`
    doc.clause(
        "3. Proposed Purchase Price",
        format!(
            "Buyer proposes to purchase the Property for a total price of ${}, payable in U.S. \
             dollars, subject to adjustments and prorations customary for transactions of this \
             nature. The acquisition shall be {}.",
            v(PurchasePrice, "[Offer Amount]"),
            v(AcquisitionType, "[all cash / financed]"),
        ),
    );
    doc.space(0.1);

    doc.clause(
        "4. Earnest Money Deposit",
        format!(
            "Upon execution of a mutually acceptable Purchase and Sale Agreement (\"PSA\"), Buyer \
             shall deposit ${} into escrow with {} within {} business days. The deposit shall be \
             refundable during the Due Diligence Period and non-refundable thereafter, except in \
             the event of Seller default or failure of stated contingencies.",
            v(DepositAmount, "[Deposit Amount]"),
            v(EscrowAgent, "[Escrow Agent or Title Company]"),
            v(DepositDays, "[X]"),
        ),
    );
    doc.space(0.1);

    doc.clause(
        "5. Due Diligence Period",
        format!(
            "Buyer shall have {} calendar days from the effective date of the PSA to conduct \
             inspections, review financials, and perform all due diligence, including but not \
             limited to title, survey, zoning, and environmental matters.",
            v(DueDiligenceDays, "[X]"),
        ),
    );
    doc.space(0.1);

    doc.clause(
        "6. Closing",
        format!(
            "Closing shall occur within {} days following the expiration of the Due Diligence \
             Period, or as otherwise agreed in the PSA.",
            v(ClosingDays, "[X]"),
        ),
    );
    doc.space(0.1);

    let mut financing = format!(
        "This proposal {} contingent upon Buyer obtaining financing.",
        v(FinancingContingent, "[is / is not]")
    );
    if let Some(kind) = fields.get(FinancingType) {
        financing.push_str(&format!(
            " If applicable, Buyer anticipates utilizing {kind} financing."
        ));
    }
    doc.clause("7. Financing", financing);
    doc.space(0.1);

    let mut contingencies = String::from(
        "This proposal is subject to the following contingencies, to be detailed in the PSA: \
         Approval of Buyer's due diligence findings; Acceptable title and survey; Satisfactory \
         appraisal (if financed); Environmental review (if applicable)",
    );
    if let Some(extra) = fields.get(Contingencies) {
        contingencies.push_str("; ");
        contingencies.push_str(extra);
    }
    doc.clause("8. Contingencies", contingencies);
    doc.space(0.1);

    doc.clause(
        "9. Access and Cooperation",
        "Upon mutual execution of this LOI, Seller agrees to provide Buyer and its representatives \
         reasonable access to the Property and operating information necessary for Buyer's \
         evaluation.",
    );
    doc.space(0.1);

    doc.clause(
        "10. Broker Disclosure",
        format!(
            "The parties acknowledge that the following brokers are involved in this transaction: \
             Buyer's Broker: {}. Seller's Broker: {}. Each party shall be responsible for any \
             commissions owed to their respective brokers.",
            broker(fields, BuyerBroker, BuyerBrokerFirm, BuyerBrokerLicense),
            broker(fields, SellerBroker, SellerBrokerFirm, SellerBrokerLicense),
        ),
    );
    doc.space(0.1);

    doc.clause(
        "11. Confidentiality",
        "Both parties agree to maintain confidentiality regarding the terms and discussions of \
         this proposed transaction and not to disclose information to outside parties except as \
         required by law or in connection with financing or due diligence.",
    );
    doc.space(0.1);

    doc.clause(
        "12. Expiration",
        format!(
            "This LOI shall expire if not executed by both parties by {}, after which it shall \
             be considered withdrawn.",
            v(ExpirationDate, "[Date/Time]"),
        ),
    );
    doc.space(0.1);

    doc.clause(
        "13. Non-Binding Effect",
        "This LOI is intended solely as an outline for negotiation and does not constitute a \
         binding contract to buy or sell the Property. The only provisions intended to be \
         binding are those relating to confidentiality (Section 11) and broker disclosure \
         (Section 10). A binding obligation will arise only upon execution of a mutually agreed \
         Purchase and Sale Agreement.",
    );
    doc.space(0.4);

    let signature_date = v(Date, "[Insert Date]");

    doc.line("Sincerely,");
    doc.space(0.3);
    doc.signature(
        v(BuyerName, "[Buyer's Name / Entity]"),
        v(BuyerAuthorizedSigner, "[Authorized Signer]"),
        v(BuyerTitle, "[Title if applicable]"),
        &signature_date,
    );
    doc.space(0.4);

    doc.caption("Acknowledged and Agreed:");
    doc.space(0.1);
    doc.signature(
        v(SellerName, "[Seller's Name / Entity]"),
        v(SellerAuthorizedSigner, "[Authorized Signer]"),
        v(SellerTitle, "[Title if applicable]"),
        &signature_date,
    );

    doc.blocks
}

/// Broker name followed by firm and license when provided
fn broker(
    fields: &FieldValues,
    name: FieldName,
    firm: FieldName,
    license: FieldName,
) -> String {
    let mut text = fields.value_or(name, "[Name]").to_string();
    if let Some(firm) = fields.get(firm) {
        text.push_str(", ");
        text.push_str(firm);
    }
    if let Some(license) = fields.get(license) {
        text.push_str(", License #");
        text.push_str(license);
    }
    text
}

/// Accumulates blocks in document order
#[derive(Default)]
struct LoiBuilder {
    blocks: Vec<Block>,
}

impl LoiBuilder {
    fn title(&mut self, text: &str) {
        self.blocks.push(Block::title(text));
    }

    fn line(&mut self, text: impl Into<String>) {
        self.blocks.push(Block::body(text));
    }

    fn caption(&mut self, text: impl Into<String>) {
        self.blocks.push(Block::signature_caption(text));
    }

    fn clause(&mut self, heading: &str, body: impl Into<String>) {
        self.blocks.push(Block::heading(heading));
        self.blocks.push(Block::body(body));
    }

    fn space(&mut self, inches: f64) {
        self.blocks.push(Block::spacer_inches(inches));
    }

    fn signature(&mut self, party: String, signer: String, title: String, date: &str) {
        self.caption(party);
        self.space(0.2);
        self.blocks.push(Block::signature_line(SIGNATURE_RULE));
        self.blocks
            .push(Block::signature_line(format!("Name: {signer}")));
        self.blocks
            .push(Block::signature_line(format!("Title: {title}")));
        self.blocks
            .push(Block::signature_line(format!("Date: {date}")));
    }
}
