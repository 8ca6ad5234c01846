//! Static site declaration.
//!
//! This is the authored source of truth for the site: identity, theme
//! defaults, and the full sidebar navigation tree. Environment and manifest
//! overrides are layered on top at build time; nothing here is read from
//! the environment.

use docconf_config::{
    Footer, Gutter, GutterPanel, Logo, MarkdownOptions, ServiceLink, SiteDecl, SiteMeta, TextLink,
    ThemeOptions, Topbar,
};
use docconf_nav::NavNode;

/// The complete static declaration for the Atlas Chain documentation site.
pub(crate) fn site_decl() -> SiteDecl {
    SiteDecl {
        theme: "cosmos".to_owned(),
        title: "Atlas Chain Documentation".to_owned(),
        image: "/meta_img.jpg".to_owned(),
        meta: SiteMeta {
            author: "AtlasLabs".to_owned(),
            url: "https://docs.atlaschain.dev".to_owned(),
            short_name: "Atlas Docs".to_owned(),
            twitter_handle: "@atlaschain".to_owned(),
            og_image: "/meta_img.jpg".to_owned(),
        },
        markdown: MarkdownOptions { math: true },
        theme_options: theme_options(),
        nav: navigation(),
        ..Default::default()
    }
}

fn theme_options() -> ThemeOptions {
    ThemeOptions {
        repo: "atlas-labs/atlas-core".to_owned(),
        docs_repo: "atlas-labs/atlas-core".to_owned(),
        docs_branch: "dev".to_owned(),
        docs_dir: "docs".to_owned(),
        edit_links: true,
        custom: true,
        default_image: "/meta_img.jpg".to_owned(),
        logo: Logo {
            src: "/logo.png".to_owned(),
        },
        topbar: Topbar { banner: false },
        gutter: Some(Gutter {
            title: "Help & Support".to_owned(),
            chat: GutterPanel {
                title: "Developer Chat".to_owned(),
                text: "Chat with Atlas developers on Discord.".to_owned(),
                url: "https://discord.gg/atlaschain".to_owned(),
                bg: "linear-gradient(103.75deg, #1B1E36 0%, #22253F 100%)".to_owned(),
                logo: None,
            },
            github: GutterPanel {
                title: "Found an Issue?".to_owned(),
                text: "Help us improve this page by suggesting edits on GitHub.".to_owned(),
                url: "https://github.com/atlas-labs/atlas-core".to_owned(),
                bg: "#F8F9FC".to_owned(),
                logo: None,
            },
            forum: GutterPanel {
                title: "Atlas Forum".to_owned(),
                text: "Join the Atlas Forum to learn more.".to_owned(),
                url: "https://gov.atlaschain.dev/".to_owned(),
                bg: "linear-gradient(225deg, #46509F -1.08%, #2F3564 95.88%)".to_owned(),
                logo: Some("cosmos".to_owned()),
            },
        }),
        footer: Footer {
            logo: "/logo.png".to_owned(),
            text_link: TextLink {
                text: "atlaschain.dev".to_owned(),
                url: "https://atlaschain.dev".to_owned(),
            },
            services: vec![
                ServiceLink {
                    service: "github".to_owned(),
                    url: "https://github.com/atlas-labs/atlas-core".to_owned(),
                },
                ServiceLink {
                    service: "twitter".to_owned(),
                    url: "https://twitter.com/atlaschain".to_owned(),
                },
                ServiceLink {
                    service: "linkedin".to_owned(),
                    url: "https://www.linkedin.com/company/atlas-labs".to_owned(),
                },
                ServiceLink {
                    service: "medium".to_owned(),
                    url: "https://atlaslabs.medium.com".to_owned(),
                },
            ],
            smallprint: "This website is maintained by [Atlas Labs](https://atlaschain.dev)."
                .to_owned(),
            links: Vec::new(),
        },
        algolia: None,
    }
}

/// The sidebar navigation tree, in rendered order.
fn navigation() -> Vec<NavNode> {
    vec![
        NavNode::section(
            "About Atlas",
            vec![
                NavNode::directory("Introduction", "/intro"),
                NavNode::page("Glossary", "/glossary/"),
                NavNode::link("Atlas Ecosystem", "https://atlaschain.dev/ecosystem"),
            ],
        ),
        NavNode::section(
            "For Users",
            vec![
                NavNode::directory("Basic Concepts", "/concepts"),
                NavNode::directory("Chain Modules", "/modules"),
                NavNode::directory("Atlas Hub", "/hub"),
            ],
        ),
        NavNode::section(
            "For Developers",
            vec![
                NavNode::directory("Technical Concepts", "/tech-concepts"),
                NavNode::directory("Tools", "/tools"),
                NavNode::directory("Building Smart Contracts", "/contracts"),
                NavNode::directory("Building Exchanges", "/exchange"),
                NavNode::directory("Networks", "/networks"),
            ],
        ),
        NavNode::section(
            "For Traders",
            vec![NavNode::link(
                "Trader API Documentation",
                "https://api.atlaschain.dev/",
            )],
        ),
        NavNode::section(
            "For Validators",
            vec![
                NavNode::section(
                    "Mainnet",
                    vec![
                        NavNode::directory(
                            "Canonical Chain Upgrade",
                            "/guides/mainnet/canonical-chain-upgrade",
                        )
                        .with_children(vec![
                            NavNode::page(
                                "Upgrade Instructions",
                                "/guides/mainnet/canonical-chain-upgrade",
                            ),
                            NavNode::page("Upgrade to v2", "/guides/mainnet/canonical-v2"),
                            NavNode::page("Upgrade to v3", "/guides/mainnet/canonical-v3"),
                            NavNode::page("Upgrade to v4", "/guides/mainnet/canonical-v4"),
                        ]),
                        NavNode::page(
                            "Becoming a Validator",
                            "/guides/mainnet/becoming-a-validator",
                        ),
                        NavNode::page("Setup Bridge Orchestrator", "/guides/mainnet/orchestrator"),
                    ],
                ),
                NavNode::section(
                    "Testnet",
                    vec![
                        NavNode::page(
                            "Becoming a Validator",
                            "/guides/testnet/becoming-a-validator",
                        ),
                        NavNode::page("Setup Bridge Orchestrator", "/guides/testnet/orchestrator"),
                    ],
                ),
            ],
        ),
        NavNode::section(
            "Resources",
            vec![
                NavNode::link("Atlas REST API Spec", "https://lcd.atlaschain.dev/swagger/"),
                NavNode::link("Atlas Explorer", "https://explorer.atlaschain.dev/"),
                NavNode::link("Discussion Forum", "https://gov.atlaschain.dev/"),
            ],
        ),
    ]
}
