use bank_api::endpoints::{
    spy_cards::SpyCardType,
    trade::{Resource, TradeType},
    trust_fund::TrustFundAction,
};

pub fn resource_label(resource: Resource) -> &'static str {
    match resource {
        Resource::Oil => "نفت",
        Resource::Wood => "چوب",
        Resource::Stone => "سنگ",
        Resource::Crystal => "کریستال",
        Resource::Strenium => "استرنیوم",
    }
}

pub fn trade_type_label(kind: TradeType) -> &'static str {
    match kind {
        TradeType::Buy => "خرید",
        TradeType::Sell => "فروش",
    }
}

pub fn trust_fund_action_label(action: TrustFundAction) -> &'static str {
    match action {
        TrustFundAction::Add => "اضافه کردن",
        TrustFundAction::Delete => "حذف",
    }
}

pub fn spy_card_label(kind: SpyCardType) -> &'static str {
    match kind {
        SpyCardType::Information => "اطلاعاتی",
        SpyCardType::Market => "اقتصادی",
        SpyCardType::Sabotage => "تخریبی",
    }
}
