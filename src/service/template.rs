//! Catalog of pre-written informational embeds.
//!
//! Each template is served by a prefix command (`!!revolut`, `!!status`, ...) and
//! posted into the channel where the command was typed. Handler-specific payment
//! details are shared privately in tickets, so the templates only carry the
//! public instructions.

use serenity::all::{CreateEmbed, CreateEmbedAuthor, CreateEmbedFooter};

use crate::{
    model::{
        button::{ButtonSpec, ButtonStyleKind},
        post::ComposedMessage,
        template::{Template, TemplateField},
    },
    service::text::{truncate, BODY_LIMIT},
};

/// Longest access key shown in the setup guide.
pub const KEY_LIMIT: usize = 256;

const ORANGE: u32 = 0xE67E22;
const BLUE: u32 = 0x3498DB;
const GREEN: u32 = 0x2ECC71;
const GOLD: u32 = 0xF1C40F;
const PURPLE: u32 = 0x9B59B6;
const TEAL: u32 = 0x1ABC9C;

/// All prefix-command templates, in the order `!!status` lists them.
pub const TEMPLATES: &[Template] = &[
    Template {
        command: "nopaypal",
        title: "🌐 Payment Update Notice 🌐",
        description: "Hello! Thank you for your interest in our products and services.",
        colour: ORANGE,
        fields: &[
            TemplateField::Text(
                "⚠️ Important Notice",
                "At this time, we do not accept PayPal for payments. However, we have five secure alternatives that support both debit and credit card transactions:",
            ),
            TemplateField::Text(
                "💳 Available Payment Methods",
                "✅ **Revolut**\n✅ **WorldRemit**\n✅ **Remitly**\n✅ **Skrill**\n✅ **Skrill Gift Card via G2A**",
            ),
            TemplateField::Text(
                "💡 About These Platforms",
                "These platforms are reliable and widely used as excellent replacements for PayPal.",
            ),
            TemplateField::Text(
                "💬 Next Steps",
                "Kindly let us know which payment method you prefer, and we'll provide you with the necessary details to proceed.",
            ),
        ],
        footer: "Thank you for your understanding and continued trust in our business!",
    },
    Template {
        command: "revolut",
        title: "🔵 Revolut - How to Purchase",
        description: "Follow these steps to complete your payment via Revolut:",
        colour: BLUE,
        fields: &[
            TemplateField::Text(
                "📋 Step-by-Step Instructions",
                "1️⃣ Ask in your ticket for the current processor link\n2️⃣ Send the amount + service fee (+2.5 EUR for day key, +5 EUR for week/month key)\n3️⃣ Send a screenshot of the receipt in your ticket\n4️⃣ Ping the processor named in your ticket\n5️⃣ Wait for the processor to confirm payment",
            ),
            TemplateField::Text(
                "⚠️ Important Note",
                "We do not accept payment without the service fee included. Please pay the correct amount so that the flow will be smooth.",
            ),
        ],
        footer: "Please ensure you include the service fee for smooth processing!",
    },
    Template {
        command: "remitly",
        title: "📧 Remitly Instructions",
        description: "Follow these steps to set up your Remitly payment:",
        colour: GREEN,
        fields: &[
            TemplateField::Text(
                "📋 Step-by-Step Instructions",
                "1️⃣ Create an account at https://www.remitly.com\n2️⃣ After creating the account, it will ask for receiver details\n3️⃣ For the total amount, ask support for the correct amount (we follow Google conversion)\n4️⃣ Choose Delivery Method → Mobile Money → GCASH\n5️⃣ Choose your preferred payment method\n6️⃣ Screenshot the next page in your ticket",
            ),
            TemplateField::Text(
                "💡 Important Note",
                "We will provide the handler's information afterwards in your ticket.",
            ),
        ],
        footer: "Make sure to screenshot the confirmation page for your ticket!",
    },
    Template {
        command: "procinfo",
        title: "📋 Processor Information",
        description: "✅ **REMITLY AND WORLDREMIT PAYMENT INFO** ✅",
        colour: GOLD,
        fields: &[
            TemplateField::Text(
                "👤 Receiver Details",
                "The receiver's name and mobile number are shared privately in your ticket.\n**Country:** Philippines",
            ),
            TemplateField::Text("💳 Accepted Payment Methods", "GCash, Mobile Wallet, Maya Wallet"),
            TemplateField::Text(
                "⚠️ Important Warning",
                "👉 Please double-check the details before sending your payment.",
            ),
            TemplateField::Text(
                "📸 Final Note",
                "Once sent, kindly provide a screenshot or transaction reference for faster confirmation. Thank you!",
            ),
        ],
        footer: "Double-check all details before proceeding with your payment!",
    },
    Template {
        command: "key",
        title: "🔑 Access Your Key & Download Loader",
        description: "Follow these instructions to access your key and download the necessary files:",
        colour: PURPLE,
        fields: &[
            TemplateField::Text(
                "🔐 Key Access",
                "You will see your key here\n**Key Link:** https://omegaberg.com/clients/purchases/",
            ),
            TemplateField::Text("📥 Download Loader", "**Loader Link:** https://omegaberg.com/files/"),
            TemplateField::Text(
                "📋 Instructions",
                "1️⃣ Find the product that you purchased on the categories (right side)\n2️⃣ Expand it and find the product",
            ),
        ],
        footer: "Keep your key secure and only download from official links!",
    },
    Template {
        command: "skrill",
        title: "💰 Skrill Instructions",
        description: "For Skrill payments, it is the same as PayPal but easier!",
        colour: ORANGE,
        fields: &[
            TemplateField::Text(
                "📋 Step-by-Step Instructions",
                "1️⃣ Login to Skrill\n2️⃣ Choose send money (Skrill to Skrill)\n3️⃣ Use the account email given in your ticket\n4️⃣ When sending payments, use the Skrill calculator for money conversion\n5️⃣ Click send\n6️⃣ **DO NOT ADD A MESSAGE OR NOTE WHEN SENDING PAYMENT**\n7️⃣ Send us the receipt and name on Skrill",
            ),
            TemplateField::Text(
                "💶 Currency Information",
                "**NOTE:** We follow EURO currency and please add 5 euros fees on top of the STORE price.",
            ),
            TemplateField::Text(
                "⚠️ Important Warning",
                "Do not include any messages or notes with your payment!",
            ),
        ],
        footer: "Remember: No messages or notes - send receipt and name only!",
    },
    Template {
        command: "worldremit",
        title: "🌍 World Remit Instructions",
        description: "Here's how you can pay using World Remit",
        colour: TEAL,
        fields: &[
            TemplateField::Text(
                "📋 Setup Instructions",
                "1️⃣ Go to https://www.worldremit.com\n2️⃣ Change \"You Send\" country to your country\n3️⃣ Type the amount that you will be sending (we follow Google conversion, ask support)\n4️⃣ Click Receive Method and change it to Mobile Money\n5️⃣ Click Continue\n6️⃣ Select Partner and change it to Gcash/Paymaya (please verify this in your ticket first)\n7️⃣ Click Continue",
            ),
            TemplateField::Text(
                "📝 Registration Details",
                "**Sending from:** your country\n**State:** your state\n**Sending to:** Philippines\n**Add your email address**\n**Create your password**",
            ),
            TemplateField::Text(
                "💡 Final Note",
                "Once you are registered, it will ask you for the payment handler's credentials. Please screenshot it and send it to your ticket, thank you.",
            ),
        ],
        footer: "Always verify details in your ticket before proceeding!",
    },
    Template {
        command: "status",
        title: "📊 Omegaberg Bot Status",
        description: "Current status of our Discord bot and services",
        colour: GREEN,
        fields: &[
            TemplateField::Text(
                "🤖 Bot Status",
                "✅ **Online and Operational**\n🔄 All commands functioning normally",
            ),
            TemplateField::Text(
                "💳 Payment Services",
                "✅ **All payment methods available**\n• Revolut, Remitly, WorldRemit\n• Skrill and processor payments active",
            ),
            TemplateField::CommandList("🛠️ Available Commands"),
            TemplateField::Text(
                "📞 Support",
                "For assistance, create a support ticket or contact staff members.",
            ),
        ],
        footer: "Status updated automatically • All systems operational",
    },
    Template {
        command: "createorder",
        title: "📦 How to Create an Order",
        description: "Welcome! Follow these simple steps to create your order on Omegaberg:",
        colour: BLUE,
        fields: &[TemplateField::Text(
            "📝 Step-by-Step Instructions",
            "1️⃣ Create an account on https://omegaberg.com\n2️⃣ Go to the store and click on the product you want to purchase\n3️⃣ Click on your desired product subscription, then add to cart\n4️⃣ Click 'Review and Checkout'\n   • Address is not required\n   • No need to pay at this step\n5️⃣ Choose **'Manual'** under payment method\n6️⃣ Click **'Place order and pay'**\n7️⃣ Send your order number to support (e.g., Order #23455)",
        )],
        footer: "Need help? Create a support ticket or contact staff members!",
    },
];

/// Finds the template for a command name. Names are case-sensitive.
pub fn find_template(command: &str) -> Option<&'static Template> {
    TEMPLATES.iter().find(|template| template.command == command)
}

/// Builds the embed for a template.
///
/// `prefix` is used to render command-list fields, so the listing always matches
/// the prefix the bot is actually listening on.
pub fn render_template(template: &Template, brand_name: &str, prefix: &str) -> CreateEmbed {
    let mut embed = CreateEmbed::new()
        .title(template.title)
        .description(template.description)
        .colour(template.colour);

    for field in template.fields {
        embed = match *field {
            TemplateField::Text(name, value) => embed.field(name, value, false),
            TemplateField::CommandList(name) => embed.field(name, command_list(prefix), false),
        };
    }

    embed
        .footer(CreateEmbedFooter::new(template.footer))
        .author(CreateEmbedAuthor::new(brand_name))
}

/// Inline-code list of every template command with the prefix applied.
pub fn command_list(prefix: &str) -> String {
    let commands = TEMPLATES
        .iter()
        .map(|template| format!("`{}{}`", prefix, template.command))
        .collect::<Vec<_>>()
        .join(", ");

    format!("**Information Commands:**\n{}", commands)
}

/// Composes the `/post info` setup guide for an access key.
///
/// The guide always goes to the channel the command was used in, so it bypasses
/// the channel and mention handling of regular posts. A "Download Loader" link
/// button is attached when a download URL is configured. Keys longer than
/// `KEY_LIMIT` characters are cut so the instructions always fit in the embed.
pub fn compose_setup_guide(key: &str, download_url: Option<&str>) -> ComposedMessage {
    let body = format!(
        "**Access Key:** `{}`\n\n**Setup Instructions:**\n\
         1. Download the loader using the button below.\n\
         2. Make sure the game is installed and has been launched at least once so all game files are present.\n\
         3. Fully close the game.\n\
         4. Launch the loader and enter your access key.\n\
         5. Select your game region and start the loader.\n\
         6. Launch the game once the loader confirms it is ready.\n\
         7. If anything fails, open a support ticket with a screenshot of the loader.",
        truncate(key.trim(), KEY_LIMIT)
    );

    let buttons = download_url
        .map(|url| {
            vec![ButtonSpec::new(
                "Download Loader",
                Some(url.to_string()),
                None,
                ButtonStyleKind::Primary,
            )]
        })
        .unwrap_or_default();

    ComposedMessage {
        title: "Setup Guide".to_string(),
        body: truncate(&body, BODY_LIMIT),
        buttons,
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn template_commands_are_unique() {
        let commands: HashSet<_> = TEMPLATES.iter().map(|t| t.command).collect();

        assert_eq!(commands.len(), TEMPLATES.len());
    }

    /// Tests that command names match exactly.
    ///
    /// Expected: "revolut" found, "Revolut" and unknown names not found
    #[test]
    fn finds_templates_case_sensitively() {
        assert_eq!(find_template("revolut").map(|t| t.command), Some("revolut"));
        assert!(find_template("Revolut").is_none());
        assert!(find_template("STATUS").is_none());
        assert!(find_template("paypal").is_none());
    }

    /// Tests that every template renders within Discord's embed limits.
    ///
    /// Expected: titles <= 256, field values <= 1024, footers <= 2048, brand author set
    #[test]
    fn templates_fit_embed_limits() {
        for template in TEMPLATES {
            assert!(template.title.chars().count() <= 256, "{}", template.command);
            assert!(template.footer.chars().count() <= 2048, "{}", template.command);

            let embed = serde_json::to_value(render_template(template, "Brand", "!!")).unwrap();
            assert_eq!(embed["author"]["name"], "Brand", "{}", template.command);
            for field in embed["fields"].as_array().unwrap() {
                let value = field["value"].as_str().unwrap();
                assert!(value.chars().count() <= 1024, "{}", template.command);
                assert_eq!(field["inline"], false);
            }
        }
    }

    #[test]
    fn status_lists_commands_with_prefix() {
        let list = command_list("?");

        assert!(list.contains("`?nopaypal`"));
        assert!(list.contains("`?createorder`"));
        assert!(!list.contains("!!"));
    }

    #[test]
    fn setup_guide_includes_key_and_download_button() {
        let guide = compose_setup_guide(" ABC-123 ", Some("https://example.com/loader"));

        assert!(guide.body.contains("`ABC-123`"));
        assert_eq!(guide.buttons.len(), 1);
        assert_eq!(guide.buttons[0].style(), ButtonStyleKind::Link);
        assert_eq!(guide.mention_text, "");
        assert!(!guide.mention_everyone);
    }

    /// Tests that an oversized key cannot push the guide past the embed limit.
    ///
    /// Expected: key cut to 256 characters, instructions intact, body within 4096
    #[test]
    fn setup_guide_caps_long_keys() {
        let guide = compose_setup_guide(&"K".repeat(6000), None);

        assert!(guide.body.chars().count() <= BODY_LIMIT);
        assert!(guide.body.contains(&format!("`{}`", "K".repeat(KEY_LIMIT))));
        assert!(!guide.body.contains(&"K".repeat(KEY_LIMIT + 1)));
        assert!(guide.body.contains("7. If anything fails"));
    }

    #[test]
    fn setup_guide_without_download_url_has_no_buttons() {
        assert!(compose_setup_guide("KEY", None).buttons.is_empty());
    }
}
