//! Fixed seed datasets for the Chiang Rai Studies tables.
//!
//! A listing call that finds its table empty inserts one of these batches
//! before running the requested query, so a fresh deployment never serves
//! an empty public page. Payloads are static; they are inserted once and
//! never topped up or refreshed.

use chrono::{DateTime, NaiveDate, Utc};

use crate::database::models::chiang_rai::{ActivityType, IdentityCategory};

pub struct IdentitySeed {
    pub code: IdentityCategory,
    pub name_th: &'static str,
    pub name_en: &'static str,
    pub description: &'static str,
    pub image_url: &'static str,
}

pub struct ArtifactSeed {
    pub title: &'static str,
    pub description: &'static str,
    pub content: Option<&'static str>,
    pub category: IdentityCategory,
    pub media_type: &'static str,
    pub media_urls: &'static [&'static str],
    pub thumbnail_url: &'static str,
}

pub struct ArticleSeed {
    pub title: &'static str,
    pub slug: &'static str,
    pub abstract_text: &'static str,
    pub content: &'static str,
    pub author: &'static str,
    pub thumbnail_url: &'static str,
}

pub struct ActivitySeed {
    pub title: &'static str,
    pub slug: &'static str,
    pub activity_type: ActivityType,
    pub description: &'static str,
    pub content: &'static str,
    pub thumbnail_url: &'static str,
    pub published_at: (i32, u32, u32),
}

impl ActivitySeed {
    pub fn published_date(&self) -> DateTime<Utc> {
        let (y, m, d) = self.published_at;
        let naive = NaiveDate::from_ymd_opt(y, m, d)
            .unwrap_or_default()
            .and_hms_opt(0, 0, 0)
            .unwrap_or_default();
        DateTime::from_naive_utc_and_offset(naive, Utc)
    }
}

pub fn default_identities() -> &'static [IdentitySeed] {
    &[
        IdentitySeed {
            code: IdentityCategory::History,
            name_th: "ประวัติศาสตร์",
            name_en: "History",
            description: "ประวัติศาสตร์ความเป็นมาของเมืองเชียงรายและอาณาจักรล้านนา",
            image_url: "/images/chiang-rai/history.jpg",
        },
        IdentitySeed {
            code: IdentityCategory::Archaeology,
            name_th: "โบราณคดี",
            name_en: "Archaeology",
            description: "การศึกษาหลักฐานทางโบราณคดีและแหล่งประวัติศาสตร์ในพื้นที่",
            image_url: "/images/chiang-rai/archaeology.jpg",
        },
        IdentitySeed {
            code: IdentityCategory::Culture,
            name_th: "วัฒนธรรม ความเชื่อ",
            name_en: "Culture & Beliefs",
            description: "วิถีชีวิต ประเพณี และความเชื่อท้องถิ่นที่สืบทอดกันมา",
            image_url: "/images/chiang-rai/culture.jpg",
        },
        IdentitySeed {
            code: IdentityCategory::Arts,
            name_th: "ศิลปะการแสดง",
            name_en: "Performing Arts",
            description: "ดนตรีพื้นเมือง การฟ้อนรำ และศิลปะการแสดงล้านนา",
            image_url: "/images/chiang-rai/arts.jpg",
        },
        IdentitySeed {
            code: IdentityCategory::Wisdom,
            name_th: "ภูมิปัญญาท้องถิ่น",
            name_en: "Local Wisdom",
            description: "องค์ความรู้ภูมิปัญญาท้องถิ่นในด้านต่างๆ",
            image_url: "/images/chiang-rai/wisdom.jpg",
        },
    ]
}

pub fn sample_artifacts() -> &'static [ArtifactSeed] {
    &[
        ArtifactSeed {
            title: "คัมภีร์ใบลานล้านนา",
            description: "คัมภีร์โบราณจารึกอักษรธรรมล้านนา บันทึกเรื่องราวทางศาสนาและประวัติศาสตร์",
            content: Some("รายละเอียดเกี่ยวกับคัมภีร์ใบลาน..."),
            category: IdentityCategory::History,
            media_type: "IMAGE",
            media_urls: &["https://images.unsplash.com/photo-1544256718-3bcf237f3974"],
            thumbnail_url: "https://images.unsplash.com/photo-1544256718-3bcf237f3974",
        },
        ArtifactSeed {
            title: "เครื่องเงินเชียงราย",
            description: "งานหัตถกรรมเครื่องเงินที่มีลวดลายเอกลักษณ์เฉพาะตัวของช่างฝีมือเชียงราย",
            content: None,
            category: IdentityCategory::Wisdom,
            media_type: "IMAGE",
            media_urls: &["https://images.unsplash.com/photo-1610450917711-209214732120"],
            thumbnail_url: "https://images.unsplash.com/photo-1610450917711-209214732120",
        },
        ArtifactSeed {
            title: "กลองสะบัดชัย",
            description: "ศิลปะการดนตรีและการแสดงอันทรงพลังของล้านนา",
            content: None,
            category: IdentityCategory::Arts,
            media_type: "VIDEO",
            media_urls: &["https://www.youtube.com/watch?v=example"],
            thumbnail_url: "https://images.unsplash.com/photo-1460723237483-7a6dc9d0b212",
        },
        ArtifactSeed {
            title: "ผ้าทอไทลื้อ",
            description: "ผ้าทอมือลายน้ำไหล เอกลักษณ์ของชาวไทลื้อเชียงของ",
            content: None,
            category: IdentityCategory::Culture,
            media_type: "IMAGE",
            media_urls: &["https://images.unsplash.com/photo-1523363402092-74b89c02d94b"],
            thumbnail_url: "https://images.unsplash.com/photo-1523363402092-74b89c02d94b",
        },
        ArtifactSeed {
            title: "พระพุทธรูปเชียงแสน",
            description: "พระพุทธรูปศิลปะเชียงแสน สกุลช่างสิงห์หนึ่ง",
            content: None,
            category: IdentityCategory::Archaeology,
            media_type: "IMAGE",
            media_urls: &["https://images.unsplash.com/photo-1626270634689-54d6537706d9"],
            thumbnail_url: "https://images.unsplash.com/photo-1626270634689-54d6537706d9",
        },
    ]
}

pub fn sample_articles() -> &'static [ArticleSeed] {
    &[
        ArticleSeed {
            title: "การเปลี่ยนแปลงทางสังคมวัฒนธรรมในลุ่มน้ำโขง",
            slug: "socio-cultural-change-mekong-basin",
            abstract_text: "บทความวิชาการสำรวจผลกระทบจากการพัฒนาเศรษฐกิจข้ามพรมแดนต่อวิถีชีวิตดั้งเดิม",
            content: "<p>เนื้อหาฉบับเต็มของบทความ...</p>",
            author: "ดร.สมชาย ใจดี",
            thumbnail_url: "https://images.unsplash.com/photo-1518176258769-f227c798150e",
        },
        ArticleSeed {
            title: "ภูมิปัญญาท้องถิ่นและการจัดการทรัพยากรชุมชน",
            slug: "local-wisdom-resource-management",
            abstract_text: "งานวิจัยเชิงปฏิบัติการแบบมีส่วนร่วมในการจัดการป่าชุมชนเชียงราย",
            content: "<p>เนื้อหาฉบับเต็มของงานวิจัย...</p>",
            author: "ผศ.ดร.วิชัย รักเรียน",
            thumbnail_url: "https://images.unsplash.com/photo-1542601906990-b4d3fb7d5b1e",
        },
    ]
}

pub fn sample_activities() -> &'static [ActivitySeed] {
    &[
        ActivitySeed {
            title: "เปิดศูนย์เชียงรายศึกษาอย่างเป็นทางการ",
            slug: "grand-opening-chiang-rai-center",
            activity_type: ActivityType::News,
            description: "พิธีเปิดศูนย์เชียงรายศึกษา คณะสังคมศาสตร์ มหาวิทยาลัยราชภัฏเชียงราย",
            content: "<p>รายละเอียดพิธีเปิด...</p>",
            thumbnail_url: "https://images.unsplash.com/photo-1541534741631-27b54065f909",
            published_at: (2025, 1, 15),
        },
        ActivitySeed {
            title: "ต้อนรับคณะดูงานจากมหาวิทยาลัยเชียงใหม่",
            slug: "welcome-cmu-visit",
            activity_type: ActivityType::News,
            description: "แลกเปลี่ยนเรียนรู้ด้านการจัดการทรัพยากรวัฒนธรรม",
            content: "<p>รายละเอียดการดูงาน...</p>",
            thumbnail_url: "https://images.unsplash.com/photo-1524178232363-1fb2b075b655",
            published_at: (2025, 2, 1),
        },
        ActivitySeed {
            title: "ลงนามความร่วมมือทางวิชาการกับเครือข่ายล้านนา",
            slug: "mou-lanna-network",
            activity_type: ActivityType::News,
            description: "พิธีลงนาม MOU เพื่อพัฒนาการศึกษาวิจัยท้องถิ่น",
            content: "<p>รายละเอียด MOU...</p>",
            thumbnail_url: "https://images.unsplash.com/photo-1560523160-754a9e25c68f",
            published_at: (2025, 2, 10),
        },
        ActivitySeed {
            title: "กิจกรรมจิตอาสาพัฒนาชุมชนรอบรั้วมหาลัย",
            slug: "volunteer-community-dev",
            activity_type: ActivityType::News,
            description: "นักศึกษาและบุคลากรร่วมทำกิจกรรมจิตอาสา",
            content: "<p>รายละเอียดกิจกรรม...</p>",
            thumbnail_url: "https://images.unsplash.com/photo-1559027615-cd4628902d4a",
            published_at: (2025, 2, 14),
        },
        ActivitySeed {
            title: "สรุปผลการดำเนินงานประจำปี 2568",
            slug: "annual-report-2025",
            activity_type: ActivityType::News,
            description: "รายงานความคืบหน้าและผลสัมฤทธิ์ของศูนย์ฯ",
            content: "<p>อ่านรายงานฉบับเต็ม...</p>",
            thumbnail_url: "https://images.unsplash.com/photo-1454165804606-c3d57bc86b40",
            published_at: (2025, 2, 20),
        },
        ActivitySeed {
            title: "นิทรรศการ \"วิถีไท ไทลื้อ\"",
            slug: "thai-lue-exhibition",
            activity_type: ActivityType::Event,
            description: "เชิญชมนิทรรศการวิถีชีวิตชาวไทลื้อ ณ หอประชุมใหญ่ (เริ่ม 10-12 มี.ค. 68)",
            content: "<p>รายละเอียดนิทรรศการ...</p>",
            thumbnail_url: "https://images.unsplash.com/photo-1533035339937-567086053309",
            published_at: (2025, 3, 1),
        },
        ActivitySeed {
            title: "อบรมเชิงปฏิบัติการ \"นักวิจัยท้องถิ่นรุ่นใหม่\"",
            slug: "young-local-researcher-workshop",
            activity_type: ActivityType::Event,
            description: "รับสมัครผู้สนใจเข้าร่วมอบรมกระบวนการวิจัยเพื่อท้องถิ่น (เริ่ม 20 มี.ค. 68)",
            content: "<p>รายละเอียดการอบรม...</p>",
            thumbnail_url: "https://images.unsplash.com/photo-1544531696-60c78a05f32a",
            published_at: (2025, 3, 5),
        },
        ActivitySeed {
            title: "เสวนาวิชาการ \"เชียงรายในทศวรรษหน้า\"",
            slug: "chiang-rai-next-decade-talk",
            activity_type: ActivityType::Event,
            description: "เวทีระดมความคิดเห็นทิศทางการพัฒนาจังหวัดเชียงราย (1 เม.ย. 68)",
            content: "<p>รายละเอียดเสวนา...</p>",
            thumbnail_url: "https://images.unsplash.com/photo-1475721027767-f4242310f17e",
            published_at: (2025, 3, 15),
        },
        ActivitySeed {
            title: "มหกรรมดนตรีชาติพันธุ์ล้านนา",
            slug: "lanna-ethnic-music-festival",
            activity_type: ActivityType::Event,
            description: "การแสดงดนตรีและศิลปะวัฒนธรรมจากกลุ่มชาติพันธุ์ต่างๆ (13-15 เม.ย. 68)",
            content: "<p>ตารางการแสดง...</p>",
            thumbnail_url: "https://images.unsplash.com/photo-1514525253440-b393452e8d26",
            published_at: (2025, 3, 20),
        },
        ActivitySeed {
            title: "ค่ายอาสาพัฒนาชนบท ครั้งที่ 10",
            slug: "rural-development-camp-10",
            activity_type: ActivityType::Event,
            description: "รับสมัครนักศึกษาจิตอาสาออกค่ายสร้างฝายชะลอน้ำ (1-5 พ.ค. 68)",
            content: "<p>รายละเอียดการรับสมัคร...</p>",
            thumbnail_url: "https://images.unsplash.com/photo-1502086223501-6cb28574d755",
            published_at: (2025, 3, 25),
        },
        ActivitySeed {
            title: "ประกาศรับสมัครทุนวิจัยประจำปี 2568",
            slug: "research-grant-2025",
            activity_type: ActivityType::Announcement,
            description: "เปิดรับข้อเสนอโครงการวิจัยด้านเชียงรายศึกษา",
            content: "<p>ดาวน์โหลดแบบฟอร์ม...</p>",
            thumbnail_url: "https://images.unsplash.com/photo-1450101499163-c8848c66ca85",
            published_at: (2025, 1, 10),
        },
        ActivitySeed {
            title: "งดให้บริการห้องสมุดชั่วคราว",
            slug: "library-close-renovation",
            activity_type: ActivityType::Announcement,
            description: "ปิดปรับปรุงระบบไฟฟ้า ระหว่างวันที่ 1-2 เมษายน",
            content: "<p>ขออภัยในความไม่สะดวก...</p>",
            thumbnail_url: "https://images.unsplash.com/photo-1481627834876-b7833e8f5570",
            published_at: (2025, 3, 30),
        },
        ActivitySeed {
            title: "รับสมัครเจ้าหน้าที่ประสานงานโครงการ 1 อัตรา",
            slug: "job-vacancy-coordinator",
            activity_type: ActivityType::Announcement,
            description: "วุฒิปริญญาตรี เงินเดือนตามโครงสร้าง",
            content: "<p>คุณสมบัติ...</p>",
            thumbnail_url: "https://images.unsplash.com/photo-1521791136064-7986c2920216",
            published_at: (2025, 2, 15),
        },
        ActivitySeed {
            title: "ประกาศผลการคัดเลือกบทความตีพิมพ์",
            slug: "article-selection-result",
            activity_type: ActivityType::Announcement,
            description: "รายชื่อบทความที่ผ่านการคัดเลือกตีพิมพ์ในวารสารฉบับล่าสุด",
            content: "<p>ตรวจสอบรายชื่อ...</p>",
            thumbnail_url: "https://images.unsplash.com/photo-1554415707-6e8cfc93fe23",
            published_at: (2025, 3, 1),
        },
        ActivitySeed {
            title: "แจ้งกำหนดการส่งรายงานความก้าวหน้า",
            slug: "progress-report-deadline",
            activity_type: ActivityType::Announcement,
            description: "ขอให้นักวิจัยส่งรายงานความก้าวหน้าภายในวันที่ 30 เมษายน",
            content: "<p>รายละเอียดการส่ง...</p>",
            thumbnail_url: "https://images.unsplash.com/photo-1517048676732-d65bc937f952",
            published_at: (2025, 4, 10),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn identity_seed_covers_every_category_once() {
        let seeds = default_identities();
        assert_eq!(seeds.len(), 5);

        let codes: HashSet<_> = seeds.iter().map(|s| s.code).collect();
        assert_eq!(codes.len(), 5);
    }

    #[test]
    fn artifact_seed_count_is_fixed() {
        assert_eq!(sample_artifacts().len(), 5);
    }

    #[test]
    fn article_seed_slugs_are_unique() {
        let seeds = sample_articles();
        assert_eq!(seeds.len(), 2);

        let slugs: HashSet<_> = seeds.iter().map(|s| s.slug).collect();
        assert_eq!(slugs.len(), seeds.len());
    }

    #[test]
    fn activity_seed_has_five_per_type() {
        let seeds = sample_activities();
        assert_eq!(seeds.len(), 15);

        let slugs: HashSet<_> = seeds.iter().map(|s| s.slug).collect();
        assert_eq!(slugs.len(), seeds.len());

        for wanted in [ActivityType::News, ActivityType::Event, ActivityType::Announcement] {
            let count = seeds.iter().filter(|s| s.activity_type == wanted).count();
            assert_eq!(count, 5);
        }
    }

    #[test]
    fn activity_seed_dates_are_valid() {
        for seed in sample_activities() {
            let date = seed.published_date();
            assert!(date.timestamp() > 0);
        }
    }
}
