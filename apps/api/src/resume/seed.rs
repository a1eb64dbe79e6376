//! Fixed starter resumes, one per supported language.
//!
//! A new session (and every reset) starts from one of these.

use crate::models::{
    EducationEntry, ExperienceEntry, Language, Profile, ProjectEntry, ResumeData, SectionOrder,
    Settings,
};

const PLACEHOLDER_PHOTO: &str = "https://picsum.photos/seed/1/200/200";

pub fn seed_resume(language: Language) -> ResumeData {
    match language {
        Language::En => seed_en(),
        Language::Tr => seed_tr(),
    }
}

fn skills(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

fn seed_en() -> ResumeData {
    ResumeData {
        profile: Profile {
            name: "Jane Doe".into(),
            title: "Senior Software Engineer".into(),
            phone: "+1 (123) 456-7890".into(),
            email: "jane.doe@example.com".into(),
            address: "San Francisco, CA".into(),
            photo_url: PLACEHOLDER_PHOTO.into(),
        },
        summary: "Innovative Senior Software Engineer with over 8 years of experience in designing, \
                  developing, and deploying scalable web applications. Proficient in modern \
                  JavaScript frameworks, cloud technologies, and agile methodologies. Passionate \
                  about creating elegant and efficient solutions to complex problems."
            .into(),
        experience: vec![
            ExperienceEntry {
                id: "exp1".into(),
                title: "Senior Software Engineer".into(),
                company: "Tech Solutions Inc.".into(),
                location: "San Francisco, CA".into(),
                start_date: "Jan 2020".into(),
                end_date: "Present".into(),
                description: "- Led the development of a new microservices architecture, improving system scalability by 40%.\n\
                              - Mentored a team of 5 junior engineers, fostering their growth and improving team productivity.\n\
                              - Optimized application performance, reducing page load times by 25% through code splitting and caching strategies."
                    .into(),
            },
            ExperienceEntry {
                id: "exp2".into(),
                title: "Software Engineer".into(),
                company: "Innovate Co.".into(),
                location: "Palo Alto, CA".into(),
                start_date: "Jun 2016".into(),
                end_date: "Dec 2019".into(),
                description: "- Developed and maintained key features for a high-traffic e-commerce platform using React and Node.js.\n\
                              - Collaborated with product managers and designers to deliver a seamless user experience.\n\
                              - Implemented a CI/CD pipeline, reducing deployment time by 50%."
                    .into(),
            },
        ],
        education: vec![
            EducationEntry {
                id: "edu1".into(),
                degree: "Master of Science in Computer Science".into(),
                institution: "Stanford University".into(),
                location: "Stanford, CA".into(),
                start_date: "2014".into(),
                end_date: "2016".into(),
            },
            EducationEntry {
                id: "edu2".into(),
                degree: "Bachelor of Science in Computer Science".into(),
                institution: "University of California, Berkeley".into(),
                location: "Berkeley, CA".into(),
                start_date: "2010".into(),
                end_date: "2014".into(),
            },
        ],
        projects: vec![ProjectEntry {
            id: "proj1".into(),
            name: "Full-Stack Website Development Project".into(),
            date: "May 2024".into(),
            description: "- Engineered a full-stack website, integrating front-end and back-end components, with the codebase shared on GitHub for collaborative development.\n\
                          - Applied expertise in C# and WebAssembly (Wasm) rendering to create a high-performance game engine, enhancing user interaction and experience."
                .into(),
        }],
        skills: skills(&[
            "JavaScript",
            "TypeScript",
            "React",
            "Node.js",
            "Next.js",
            "GraphQL",
            "AWS",
            "Docker",
            "Kubernetes",
            "WebAssembly",
            "Version Control with Git",
            "Donor Engagement",
        ]),
        custom_sections: vec![],
        settings: Settings::default(),
        sections: SectionOrder::default(),
    }
}

fn seed_tr() -> ResumeData {
    ResumeData {
        profile: Profile {
            name: "Ayşe Yılmaz".into(),
            title: "Kıdemli Yazılım Mühendisi".into(),
            phone: "+90 (555) 123-4567".into(),
            email: "ayse.yilmaz@example.com".into(),
            address: "İstanbul, Türkiye".into(),
            photo_url: PLACEHOLDER_PHOTO.into(),
        },
        summary: "Ölçeklenebilir web uygulamaları tasarlama, geliştirme ve dağıtma konusunda 8 yıldan \
                  fazla deneyime sahip yenilikçi Kıdemli Yazılım Mühendisi. Modern JavaScript \
                  frameworkleri, bulut teknolojileri ve çevik metodolojilerde yetkin. Karmaşık \
                  sorunlara zarif ve verimli çözümler yaratma konusunda tutkulu."
            .into(),
        experience: vec![
            ExperienceEntry {
                id: "exp1".into(),
                title: "Kıdemli Yazılım Mühendisi".into(),
                company: "Teknoloji Çözümleri A.Ş.".into(),
                location: "İstanbul, Türkiye".into(),
                start_date: "Oca 2020".into(),
                end_date: "Günümüz".into(),
                description: "- Yeni bir mikroservis mimarisinin geliştirilmesine liderlik ederek sistem ölçeklenebilirliğini %40 artırdı.\n\
                              - 5 genç mühendisten oluşan bir ekibe mentorluk yaparak gelişimlerini destekledi ve ekip verimliliğini artırdı.\n\
                              - Kod bölme ve önbellekleme stratejileriyle uygulama performansını optimize ederek sayfa yükleme sürelerini %25 azalttı."
                    .into(),
            },
            ExperienceEntry {
                id: "exp2".into(),
                title: "Yazılım Mühendisi".into(),
                company: "İnovasyon Ltd.".into(),
                location: "Ankara, Türkiye".into(),
                start_date: "Haz 2016".into(),
                end_date: "Ara 2019".into(),
                description: "- React ve Node.js kullanarak yüksek trafikli bir e-ticaret platformu için temel özellikleri geliştirdi ve bakımını yaptı.\n\
                              - Sorunsuz bir kullanıcı deneyimi sunmak için ürün yöneticileri ve tasarımcılarla işbirliği yaptı.\n\
                              - Dağıtım süresini %50 azaltan bir CI/CD boru hattı uyguladı."
                    .into(),
            },
        ],
        education: vec![
            EducationEntry {
                id: "edu1".into(),
                degree: "Bilgisayar Mühendisliği Yüksek Lisansı".into(),
                institution: "Orta Doğu Teknik Üniversitesi".into(),
                location: "Ankara, Türkiye".into(),
                start_date: "2014".into(),
                end_date: "2016".into(),
            },
            EducationEntry {
                id: "edu2".into(),
                degree: "Bilgisayar Mühendisliği Lisansı".into(),
                institution: "Boğaziçi Üniversitesi".into(),
                location: "İstanbul, Türkiye".into(),
                start_date: "2010".into(),
                end_date: "2014".into(),
            },
        ],
        projects: vec![ProjectEntry {
            id: "proj1".into(),
            name: "Full-Stack Web Sitesi Geliştirme Projesi".into(),
            date: "Mayıs 2024".into(),
            description: "- İşbirliğine dayalı geliştirme için kod tabanının GitHub'da paylaşıldığı, ön uç ve arka uç bileşenlerini entegre eden tam yığın bir web sitesi tasarladı.\n\
                          - Kullanıcı etkileşimini ve deneyimini geliştiren yüksek performanslı bir oyun motoru oluşturmak için C# ve WebAssembly (Wasm) oluşturma konusundaki uzmanlığını uyguladı."
                .into(),
        }],
        skills: skills(&[
            "JavaScript",
            "TypeScript",
            "React",
            "Node.js",
            "Next.js",
            "GraphQL",
            "AWS",
            "Docker",
            "Kubernetes",
            "WebAssembly",
            "Git ile Sürüm Kontrolü",
            "Bağışçı Etkileşimi",
        ]),
        custom_sections: vec![],
        settings: Settings::default(),
        sections: SectionOrder::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seeds_have_unique_entry_ids() {
        for language in [Language::En, Language::Tr] {
            let data = seed_resume(language);
            let mut ids = HashSet::new();
            let all = data
                .experience
                .iter()
                .map(|e| &e.id)
                .chain(data.education.iter().map(|e| &e.id))
                .chain(data.projects.iter().map(|p| &p.id));
            for id in all {
                assert!(ids.insert(id.clone()), "duplicate id {id} in {language:?} seed");
            }
        }
    }

    #[test]
    fn test_seed_bullets_use_dash_markers_on_every_line() {
        let data = seed_resume(Language::En);
        for line in data.experience[0].description.lines() {
            assert!(line.starts_with("- "), "line without marker: {line:?}");
        }
    }

    #[test]
    fn test_turkish_seed_is_localized() {
        let data = seed_resume(Language::Tr);
        assert_eq!(data.profile.name, "Ayşe Yılmaz");
        assert_eq!(data.experience.len(), 2);
        assert!(data.custom_sections.is_empty());
    }
}
