//! The fixed fallback feed.
//!
//! Shown whenever the search API fails or returns nothing usable, so the page
//! always has cards to render.

use crate::models::NewsItem;

/// Return the fixed five-item fallback feed, in display order.
pub fn fallback_news() -> Vec<NewsItem> {
    vec![
        NewsItem::new(
            "Google VP предупреждает о рисках для AI-стартапов",
            "Вице-президент Google считает, что агрегаторы AI и стартапы для студентов могут не выжить в условиях насыщения рынка.",
            "https://techcrunch.com/2026/02/21/google-vp-warns-that-two-types-of-ai-startups-may-not-survive/",
            "TechCrunch",
        ),
        NewsItem::new(
            "Экономист назвал AI «переоцененным и опасным»",
            "Стив Хэнки предупреждает о возможном пузыре в AI-индустрии и рекомендует инвесторам быть осторожными.",
            "https://www.businessinsider.com/steve-hanke-ai-yann-lecun-meta-hype-bubble-stocks-hyperscalers-2026-2",
            "Business Insider",
        ),
        NewsItem::new(
            "Cisco: синергия человека и AI",
            "Президент Cisco подчеркивает, что AI усиливает креативность и эмпатию людей, а не заменяет их полностью.",
            "https://www.devdiscourse.com/article/technology/3812759-the-human-ai-synergy-redefining-tomorrows-workforce",
            "Devdiscourse",
        ),
        NewsItem::new(
            "Чат-боты вызывают «бредовые спирали»",
            "Растет беспокойство о влиянии AI на психику пользователей, которые начинают принимать ложную информацию за реальность.",
            "https://www.nbcnews.com/video/concerns-are-growing-over-chatbots-causing-users-to-go-into-delusional-spirals-258067525827",
            "NBC News",
        ),
        NewsItem::new(
            "Mississippi запустила AI для госзакупок",
            "Инновационный хаб штата представил чатбот Procurii для улучшения государственных закупок.",
            "https://www.govtech.com/artificial-intelligence/mississippi-ai-innovation-hubs-new-chatbot-targets-procurement",
            "GovTech",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_has_five_items_in_order() {
        let items = fallback_news();
        let sources: Vec<&str> = items.iter().map(|i| i.source.as_str()).collect();
        assert_eq!(
            sources,
            vec!["TechCrunch", "Business Insider", "Devdiscourse", "NBC News", "GovTech"]
        );
    }

    #[test]
    fn test_fallback_literals() {
        let expected = vec![
            NewsItem::new(
                "Google VP предупреждает о рисках для AI-стартапов",
                "Вице-президент Google считает, что агрегаторы AI и стартапы для студентов могут не выжить в условиях насыщения рынка.",
                "https://techcrunch.com/2026/02/21/google-vp-warns-that-two-types-of-ai-startups-may-not-survive/",
                "TechCrunch",
            ),
            NewsItem::new(
                "Экономист назвал AI «переоцененным и опасным»",
                "Стив Хэнки предупреждает о возможном пузыре в AI-индустрии и рекомендует инвесторам быть осторожными.",
                "https://www.businessinsider.com/steve-hanke-ai-yann-lecun-meta-hype-bubble-stocks-hyperscalers-2026-2",
                "Business Insider",
            ),
            NewsItem::new(
                "Cisco: синергия человека и AI",
                "Президент Cisco подчеркивает, что AI усиливает креативность и эмпатию людей, а не заменяет их полностью.",
                "https://www.devdiscourse.com/article/technology/3812759-the-human-ai-synergy-redefining-tomorrows-workforce",
                "Devdiscourse",
            ),
            NewsItem::new(
                "Чат-боты вызывают «бредовые спирали»",
                "Растет беспокойство о влиянии AI на психику пользователей, которые начинают принимать ложную информацию за реальность.",
                "https://www.nbcnews.com/video/concerns-are-growing-over-chatbots-causing-users-to-go-into-delusional-spirals-258067525827",
                "NBC News",
            ),
            NewsItem::new(
                "Mississippi запустила AI для госзакупок",
                "Инновационный хаб штата представил чатбот Procurii для улучшения государственных закупок.",
                "https://www.govtech.com/artificial-intelligence/mississippi-ai-innovation-hubs-new-chatbot-targets-procurement",
                "GovTech",
            ),
        ];
        assert_eq!(fallback_news(), expected);
    }

    #[test]
    fn test_fallback_is_idempotent() {
        let first = fallback_news();
        for _ in 0..3 {
            assert_eq!(fallback_news(), first);
        }
    }

    #[test]
    fn test_fallback_items_are_complete() {
        for item in fallback_news() {
            assert!(!item.title.is_empty());
            assert!(!item.description.is_empty());
            assert!(item.url.starts_with("https://"));
            assert!(!item.source.is_empty());
        }
    }
}
