//! The compiled-in product dataset.
//!
//! The storefront has no backend; the catalog ships with the binary and is
//! validated by [`Catalog::new`](crate::catalog::Catalog::new) at startup.

use crate::catalog::{Category, ColorOption, Product, SizeOption, VariantStock};
use crate::ids::ProductId;
use crate::money::{Currency, Money};

fn brl(cents: i64) -> Money {
    Money::new(cents, Currency::BRL)
}

fn color(name: &str, hex: &str) -> ColorOption {
    ColorOption {
        name: name.to_string(),
        hex: hex.to_string(),
        available: true,
    }
}

fn size(name: &str) -> SizeOption {
    SizeOption {
        name: name.to_string(),
        available: true,
    }
}

/// The full product list, in catalog order.
pub fn products() -> Vec<Product> {
    vec![
        // Camisetas basicas
        Product {
            id: ProductId::new("1"),
            name: "Camiseta B\u{e1}sica Premium Preta".to_string(),
            slug: "camiseta-basica-preta".to_string(),
            price: brl(8990),
            promo_price: None,
            images: vec!["/assets/products/camiseta-preta.png".to_string()],
            colors: vec![color("Preto", "#1a1a1a")],
            sizes: vec![size("P"), size("M"), size("G")],
            stock_by_variant: vec![VariantStock::new("Preto", "M", 10)],
            description: "Camiseta b\u{e1}sica preta com caimento premium.".to_string(),
            material: "Algod\u{e3}o Premium 160g".to_string(),
            care: "Lavar \u{e0} m\u{e1}quina.".to_string(),
            category: Category::Camisetas,
            featured: true,
            is_new: false,
            video_url: None,
        },
        Product {
            id: ProductId::new("2"),
            name: "Camiseta B\u{e1}sica Premium Bege".to_string(),
            slug: "camiseta-basica-bege".to_string(),
            price: brl(8990),
            promo_price: None,
            images: vec!["/assets/products/camiseta-bege.png".to_string()],
            colors: vec![color("Bege", "#E8DCC4")],
            sizes: vec![size("P"), size("M"), size("G")],
            stock_by_variant: vec![VariantStock::new("Bege", "M", 8)],
            description: "B\u{e1}sica premium em tom neutro sofisticado.".to_string(),
            material: "Algod\u{e3}o Premium 160g".to_string(),
            care: "Lavar \u{e0} m\u{e1}quina.".to_string(),
            category: Category::Camisetas,
            featured: false,
            is_new: true,
            video_url: None,
        },
        // Camisetas estampadas
        Product {
            id: ProductId::new("3"),
            name: "Camiseta Estampada Jesus Is King".to_string(),
            slug: "camiseta-estampada-jesus-is-king".to_string(),
            price: brl(15990),
            promo_price: Some(brl(12990)),
            images: vec!["/assets/products/camiseta-jesus-king.png".to_string()],
            colors: vec![color("Marrom", "#8B6F5C")],
            sizes: vec![size("M"), size("G"), size("GG")],
            stock_by_variant: vec![VariantStock::new("Marrom", "G", 6)],
            description: "Estampa exclusiva com identidade street.".to_string(),
            material: "Algod\u{e3}o Premium 180g".to_string(),
            care: "Lavar \u{e0} m\u{e1}quina.".to_string(),
            category: Category::Camisetas,
            featured: true,
            is_new: true,
            video_url: None,
        },
        Product {
            id: ProductId::new("4"),
            name: "Camiseta Estampada Cross Street".to_string(),
            slug: "camiseta-estampada-cross-street".to_string(),
            price: brl(11990),
            promo_price: None,
            images: vec!["/assets/products/camiseta-branca.png".to_string()],
            colors: vec![color("Branco", "#ffffff")],
            sizes: vec![size("P"), size("M"), size("G")],
            stock_by_variant: vec![VariantStock::new("Branco", "M", 5)],
            description: "Visual urbano com estampa minimal.".to_string(),
            material: "Algod\u{e3}o Premium 170g".to_string(),
            care: "Lavar \u{e0} m\u{e1}quina.".to_string(),
            category: Category::Camisetas,
            featured: false,
            is_new: true,
            video_url: None,
        },
        // Camisetas oversized
        Product {
            id: ProductId::new("5"),
            name: "Camiseta Oversized Urban Black".to_string(),
            slug: "camiseta-oversized-urban-black".to_string(),
            price: brl(13990),
            promo_price: None,
            images: vec!["/assets/products/camiseta-preta.png".to_string()],
            colors: vec![color("Preto", "#1a1a1a")],
            sizes: vec![size("G"), size("GG"), size("XG")],
            stock_by_variant: vec![VariantStock::new("Preto", "GG", 7)],
            description: "Oversized premium com caimento largo.".to_string(),
            material: "Algod\u{e3}o Premium 180g".to_string(),
            care: "Lavar \u{e0} m\u{e1}quina.".to_string(),
            category: Category::Camisetas,
            featured: true,
            is_new: true,
            video_url: None,
        },
        Product {
            id: ProductId::new("6"),
            name: "Camiseta Oversized Earth Tone".to_string(),
            slug: "camiseta-oversized-earth-tone".to_string(),
            price: brl(13990),
            promo_price: None,
            images: vec!["/assets/products/camiseta-marrom.png".to_string()],
            colors: vec![color("Marrom", "#8B6F5C")],
            sizes: vec![size("G"), size("GG")],
            stock_by_variant: vec![VariantStock::new("Marrom", "G", 6)],
            description: "Oversized com identidade premium.".to_string(),
            material: "Algod\u{e3}o Premium 180g".to_string(),
            care: "Lavar \u{e0} m\u{e1}quina.".to_string(),
            category: Category::Camisetas,
            featured: false,
            is_new: false,
            video_url: None,
        },
        // Calcas
        Product {
            id: ProductId::new("7"),
            name: "Cal\u{e7}a Cargo Street Premium".to_string(),
            slug: "calca-cargo-street".to_string(),
            price: brl(22990),
            promo_price: None,
            images: vec![
                "https://images.unsplash.com/photo-1541099649105-f69ad21f3246".to_string(),
            ],
            colors: vec![color("Preto", "#1a1a1a")],
            sizes: vec![size("G")],
            stock_by_variant: vec![VariantStock::new("Preto", "G", 6)],
            description: "Cal\u{e7}a cargo streetwear.".to_string(),
            material: "Algod\u{e3}o + Elastano".to_string(),
            care: "Lavar \u{e0} m\u{e3}o.".to_string(),
            category: Category::Calcas,
            featured: true,
            is_new: true,
            video_url: None,
        },
        Product {
            id: ProductId::new("8"),
            name: "Cal\u{e7}a Slim Casual".to_string(),
            slug: "calca-slim-casual".to_string(),
            price: brl(19990),
            promo_price: None,
            images: vec![
                "https://images.unsplash.com/photo-1526170375885-4d8ecf77b99f".to_string(),
            ],
            colors: vec![color("Bege", "#E8DCC4")],
            sizes: vec![size("M")],
            stock_by_variant: vec![VariantStock::new("Bege", "M", 8)],
            description: "Cal\u{e7}a slim moderna.".to_string(),
            material: "Algod\u{e3}o Premium".to_string(),
            care: "Lavar \u{e0} m\u{e1}quina.".to_string(),
            category: Category::Calcas,
            featured: false,
            is_new: false,
            video_url: None,
        },
        Product {
            id: ProductId::new("9"),
            name: "Cal\u{e7}a Jogger Urban".to_string(),
            slug: "calca-jogger-urban".to_string(),
            price: brl(18990),
            promo_price: None,
            images: vec![
                "https://images.unsplash.com/photo-1593032465171-bfa53b9f1f9d".to_string(),
            ],
            colors: vec![color("Cinza", "#9CA3AF")],
            sizes: vec![size("G")],
            stock_by_variant: vec![VariantStock::new("Cinza", "G", 5)],
            description: "Jogger confort\u{e1}vel urbana.".to_string(),
            material: "Moletom Premium".to_string(),
            care: "Secar \u{e0} sombra.".to_string(),
            category: Category::Calcas,
            featured: false,
            is_new: true,
            video_url: None,
        },
        // Acessorios
        Product {
            id: ProductId::new("10"),
            name: "Bon\u{e9} Minimal Premium".to_string(),
            slug: "bone-minimal".to_string(),
            price: brl(7990),
            promo_price: None,
            images: vec![
                "https://images.unsplash.com/photo-1523381294911-8d3cead13475".to_string(),
            ],
            colors: vec![color("Preto", "#1a1a1a")],
            sizes: vec![size("\u{da}nico")],
            stock_by_variant: vec![VariantStock::new("Preto", "\u{da}nico", 20)],
            description: "Bon\u{e9} street premium.".to_string(),
            material: "Algod\u{e3}o".to_string(),
            care: "Limpeza manual.".to_string(),
            category: Category::Acessorios,
            featured: true,
            is_new: true,
            video_url: None,
        },
        Product {
            id: ProductId::new("11"),
            name: "Corrente A\u{e7}o Inox".to_string(),
            slug: "corrente-aco-inox".to_string(),
            price: brl(9990),
            promo_price: None,
            images: vec![
                "https://images.unsplash.com/photo-1600180758890-6b94519a8ba6".to_string(),
            ],
            colors: vec![color("Prata", "#D1D5DB")],
            sizes: vec![size("\u{da}nico")],
            stock_by_variant: vec![VariantStock::new("Prata", "\u{da}nico", 10)],
            description: "Corrente urbana resistente.".to_string(),
            material: "A\u{e7}o Inoxid\u{e1}vel".to_string(),
            care: "Evitar qu\u{ed}micos.".to_string(),
            category: Category::Acessorios,
            featured: false,
            is_new: false,
            video_url: None,
        },
        Product {
            id: ProductId::new("12"),
            name: "Mochila Streetwear".to_string(),
            slug: "mochila-streetwear".to_string(),
            price: brl(15990),
            promo_price: None,
            images: vec![
                "https://images.unsplash.com/photo-1585386959984-a41552231693".to_string(),
            ],
            colors: vec![color("Preto", "#1a1a1a")],
            sizes: vec![size("\u{da}nico")],
            stock_by_variant: vec![VariantStock::new("Preto", "\u{da}nico", 6)],
            description: "Mochila funcional urbana.".to_string(),
            material: "Poli\u{e9}ster".to_string(),
            care: "Pano \u{fa}mido.".to_string(),
            category: Category::Acessorios,
            featured: true,
            is_new: true,
            video_url: None,
        },
        // Kits
        Product {
            id: ProductId::new("13"),
            name: "Kit 5 Camisetas B\u{e1}sicas".to_string(),
            slug: "kit-5-camisetas".to_string(),
            price: brl(44950),
            promo_price: Some(brl(34990)),
            images: vec!["/assets/products/camisetas-variedade.png".to_string()],
            colors: vec![color("Variado", "#888888")],
            sizes: vec![size("M")],
            stock_by_variant: vec![VariantStock::new("Variado", "M", 5)],
            description: "Kit econ\u{f4}mico premium.".to_string(),
            material: "Algod\u{e3}o Premium".to_string(),
            care: "Lavar \u{e0} m\u{e1}quina.".to_string(),
            category: Category::Kits,
            featured: true,
            is_new: true,
            video_url: None,
        },
        Product {
            id: ProductId::new("14"),
            name: "Kit Street Completo".to_string(),
            slug: "kit-street-completo".to_string(),
            price: brl(59990),
            promo_price: Some(brl(49990)),
            images: vec![
                "https://images.unsplash.com/photo-1512436991641-6745cdb1723f".to_string(),
            ],
            colors: vec![color("Variado", "#888888")],
            sizes: vec![size("G")],
            stock_by_variant: vec![VariantStock::new("Variado", "G", 3)],
            description: "Look street completo.".to_string(),
            material: "Mix Premium".to_string(),
            care: "Ver etiquetas.".to_string(),
            category: Category::Kits,
            featured: true,
            is_new: false,
            video_url: None,
        },
        Product {
            id: ProductId::new("15"),
            name: "Kit Essencial Premium".to_string(),
            slug: "kit-essencial-premium".to_string(),
            price: brl(49990),
            promo_price: None,
            images: vec![
                "https://images.unsplash.com/photo-1516822003754-cca485356ecb".to_string(),
            ],
            colors: vec![color("Variado", "#888888")],
            sizes: vec![size("M")],
            stock_by_variant: vec![VariantStock::new("Variado", "M", 4)],
            description: "Kit essencial di\u{e1}rio.".to_string(),
            material: "Algod\u{e3}o Premium".to_string(),
            care: "Lavar \u{e0} m\u{e1}quina.".to_string(),
            category: Category::Kits,
            featured: false,
            is_new: false,
            video_url: None,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn test_seed_has_fifteen_products() {
        assert_eq!(products().len(), 15);
    }

    #[test]
    fn test_seed_builds_valid_catalog() {
        assert!(Catalog::new(products()).is_ok());
    }

    #[test]
    fn test_seed_promo_products() {
        let promos: Vec<String> = products()
            .into_iter()
            .filter(|p| p.is_on_promo())
            .map(|p| p.slug)
            .collect();
        assert_eq!(
            promos,
            vec![
                "camiseta-estampada-jesus-is-king",
                "kit-5-camisetas",
                "kit-street-completo",
            ]
        );
    }
}
