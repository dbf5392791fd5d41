//! Built-in catalog used by the mock backend, as the fallback when the store
//! is unreachable, and as seed data for an empty PostgreSQL database.

use super::book::{Book, Category};

struct SeedBook {
    id: u32,
    title: &'static str,
    author: &'static str,
    genre: &'static str,
    category: &'static str,
    description: &'static str,
    color_gradient: &'static str,
    available_copies: u32,
}

const SEED_BOOKS: &[SeedBook] = &[
    SeedBook { id: 1, title: "Suç ve Ceza", author: "Fyodor Dostoyevski", genre: "Klasik Roman", category: "Edebiyat", description: "Rus edebiyatının başyapıtlarından", color_gradient: "from-purple-600 to-purple-800", available_copies: 3 },
    SeedBook { id: 2, title: "1984", author: "George Orwell", genre: "Distopya", category: "Edebiyat", description: "Totaliter rejim eleştirisi", color_gradient: "from-red-600 to-red-800", available_copies: 2 },
    SeedBook { id: 3, title: "Yüzyıllık Yalnızlık", author: "Gabriel García Márquez", genre: "Büyülü Gerçekçilik", category: "Edebiyat", description: "Latin Amerika edebiyatının şaheseri", color_gradient: "from-amber-600 to-amber-800", available_copies: 1 },
    SeedBook { id: 4, title: "Sapiens", author: "Yuval Noah Harari", genre: "Tarih/Antropoloji", category: "Tarih", description: "İnsanlığın kısa tarihi", color_gradient: "from-blue-600 to-blue-800", available_copies: 4 },
    SeedBook { id: 5, title: "Kürk Mantolu Madonna", author: "Sabahattin Ali", genre: "Roman", category: "Edebiyat", description: "Türk edebiyatının unutulmaz eseri", color_gradient: "from-indigo-600 to-indigo-800", available_copies: 3 },
    SeedBook { id: 6, title: "Simyacı", author: "Paulo Coelho", genre: "Felsefi Roman", category: "Edebiyat", description: "Kişisel keşif yolculuğu", color_gradient: "from-teal-600 to-teal-800", available_copies: 2 },
    SeedBook { id: 7, title: "Sefiller", author: "Victor Hugo", genre: "Klasik Roman", category: "Edebiyat", description: "Fransız edebiyatının başyapıtı", color_gradient: "from-rose-600 to-rose-800", available_copies: 1 },
    SeedBook { id: 8, title: "Dune", author: "Frank Herbert", genre: "Bilim Kurgu", category: "Edebiyat", description: "Bilim kurgu klasiği", color_gradient: "from-orange-600 to-orange-800", available_copies: 2 },
    SeedBook { id: 9, title: "İnce Memed", author: "Yaşar Kemal", genre: "Roman", category: "Edebiyat", description: "Çukurova'nın destanı", color_gradient: "from-green-600 to-green-800", available_copies: 3 },
    SeedBook { id: 10, title: "Beyaz Diş", author: "Jack London", genre: "Macera", category: "Edebiyat", description: "Vahşi yaşam hikayesi", color_gradient: "from-cyan-600 to-cyan-800", available_copies: 2 },
    SeedBook { id: 11, title: "Türk Edebiyatı Tarihi", author: "Nihad Sami Banarlı", genre: "Edebiyat", category: "Edebiyat", description: "Türk edebiyatının kapsamlı tarihi", color_gradient: "from-blue-600 to-blue-800", available_copies: 1 },
    SeedBook { id: 12, title: "Matematik Analiz", author: "Prof. Dr. Mehmet Özkan", genre: "Matematik", category: "Matematik", description: "Üniversite düzeyinde matematik analizi", color_gradient: "from-purple-600 to-purple-800", available_copies: 1 },
    SeedBook { id: 13, title: "Osmanlı Tarihi", author: "İsmail Hakkı Uzunçarşılı", genre: "Tarih", category: "Tarih", description: "Osmanlı İmparatorluğu tarihi", color_gradient: "from-amber-600 to-amber-800", available_copies: 1 },
    SeedBook { id: 14, title: "Fizik Temelleri", author: "Dr. Ahmet Yılmaz", genre: "Fizik", category: "Fizik", description: "Temel fizik prensipleri", color_gradient: "from-green-600 to-green-800", available_copies: 1 },
    SeedBook { id: 15, title: "Türkiye Coğrafyası", author: "Prof. Dr. Necdet Tuncel", genre: "Coğrafya", category: "Coğrafya", description: "Türkiye'nin fiziki ve beşeri coğrafyası", color_gradient: "from-cyan-600 to-cyan-800", available_copies: 1 },
    SeedBook { id: 16, title: "Bilgisayar Programlama", author: "Dr. Fatma Kaya", genre: "Bilgisayar", category: "Bilgisayar", description: "Programlama temelleri ve algoritma", color_gradient: "from-indigo-600 to-indigo-800", available_copies: 1 },
    SeedBook { id: 17, title: "Modern Türk Şiiri", author: "Prof. Dr. İnci Enginün", genre: "Edebiyat", category: "Edebiyat", description: "Cumhuriyet dönemi Türk şiiri", color_gradient: "from-rose-600 to-rose-800", available_copies: 1 },
    SeedBook { id: 18, title: "Lineer Cebir", author: "Dr. Selma Altınok", genre: "Matematik", category: "Matematik", description: "Lineer cebir ve uygulamaları", color_gradient: "from-violet-600 to-violet-800", available_copies: 1 },
    SeedBook { id: 19, title: "Cumhuriyet Tarihi", author: "Prof. Dr. Kemal Karpat", genre: "Tarih", category: "Tarih", description: "Türkiye Cumhuriyeti tarihi", color_gradient: "from-orange-600 to-orange-800", available_copies: 1 },
    SeedBook { id: 20, title: "Psikoloji Giriş", author: "Dr. Ayşe Demir", genre: "Psikoloji", category: "Psikoloji", description: "Genel psikoloji prensipleri", color_gradient: "from-rose-600 to-rose-800", available_copies: 1 },
    SeedBook { id: 21, title: "Felsefe Tarihi", author: "Prof. Dr. Macit Gökberk", genre: "Felsefe", category: "Felsefe", description: "Antik çağdan günümüze felsefe", color_gradient: "from-violet-600 to-violet-800", available_copies: 1 },
    SeedBook { id: 22, title: "Sanat Tarihi", author: "Dr. Semra Ögel", genre: "Sanat", category: "Sanat", description: "Türk ve İslam sanatları", color_gradient: "from-orange-600 to-orange-800", available_copies: 1 },
    SeedBook { id: 23, title: "İngilizce Dilbilgisi", author: "Prof. Dr. Cevat Çapan", genre: "Dil", category: "Dil", description: "İngilizce gramer ve kullanım", color_gradient: "from-teal-600 to-teal-800", available_copies: 1 },
    SeedBook { id: 24, title: "Organik Kimya", author: "Dr. Hasan Özdemir", genre: "Fizik", category: "Fizik", description: "Organik kimya temelleri", color_gradient: "from-green-600 to-green-800", available_copies: 1 },
    SeedBook { id: 25, title: "Sosyoloji Giriş", author: "Prof. Dr. Zygmunt Bauman", genre: "Psikoloji", category: "Psikoloji", description: "Modern sosyoloji teorileri", color_gradient: "from-rose-600 to-rose-800", available_copies: 1 },
    SeedBook { id: 26, title: "Türk Dili", author: "Prof. Dr. Zeynep Korkmaz", genre: "Dil", category: "Dil", description: "Türk dilinin yapısı ve tarihi", color_gradient: "from-teal-600 to-teal-800", available_copies: 1 },
    SeedBook { id: 27, title: "Geometri", author: "Dr. Mustafa Kemal", genre: "Matematik", category: "Matematik", description: "Analitik ve diferansiyel geometri", color_gradient: "from-purple-600 to-purple-800", available_copies: 1 },
    SeedBook { id: 28, title: "Dünya Tarihi", author: "Prof. Dr. William McNeill", genre: "Tarih", category: "Tarih", description: "Dünya medeniyetleri tarihi", color_gradient: "from-amber-600 to-amber-800", available_copies: 1 },
    SeedBook { id: 29, title: "Quantum Fiziği", author: "Dr. Michio Kaku", genre: "Fizik", category: "Fizik", description: "Kuantum mekaniği prensipleri", color_gradient: "from-green-600 to-green-800", available_copies: 1 },
    SeedBook { id: 30, title: "Türk Edebiyatı Antolojisi", author: "Prof. Dr. Agah Sırrı Levend", genre: "Edebiyat", category: "Edebiyat", description: "Seçme Türk edebiyatı eserleri", color_gradient: "from-blue-600 to-blue-800", available_copies: 1 },
];

const SEED_CATEGORIES: &[(u32, &str, &str, &str)] = &[
    (1, "Edebiyat", "Türk ve Dünya Edebiyatı", "from-blue-600 to-blue-800"),
    (2, "Matematik", "Matematik ve İstatistik", "from-purple-600 to-purple-800"),
    (3, "Tarih", "Türk ve Dünya Tarihi", "from-amber-600 to-amber-800"),
    (4, "Fizik", "Fizik ve Astronomi", "from-green-600 to-green-800"),
    (5, "Coğrafya", "Coğrafya ve Jeoloji", "from-cyan-600 to-cyan-800"),
    (6, "Bilgisayar", "Bilgisayar Bilimleri", "from-indigo-600 to-indigo-800"),
    (7, "Psikoloji", "Psikoloji ve Sosyoloji", "from-rose-600 to-rose-800"),
    (8, "Felsefe", "Felsefe ve Mantık", "from-violet-600 to-violet-800"),
    (9, "Sanat", "Sanat ve Tasarım", "from-orange-600 to-orange-800"),
    (10, "Dil", "Dil ve Dilbilim", "from-teal-600 to-teal-800"),
];

pub fn mock_books() -> Vec<Book> {
    SEED_BOOKS
        .iter()
        .map(|seed| Book {
            id: seed.id,
            title: seed.title.to_string(),
            author: seed.author.to_string(),
            genre: seed.genre.to_string(),
            category: seed.category.to_string(),
            description: Some(seed.description.to_string()),
            color_gradient: seed.color_gradient.to_string(),
            available_copies: seed.available_copies,
        })
        .collect()
}

pub fn mock_categories() -> Vec<Category> {
    SEED_CATEGORIES
        .iter()
        .map(|&(id, name, description, color_gradient)| Category {
            id,
            name: name.to_string(),
            description: Some(description.to_string()),
            color_gradient: color_gradient.to_string(),
        })
        .collect()
}
