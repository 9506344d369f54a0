//! Per-module table initialization and seed data.
//!
//! Each content domain owns its tables and default rows. A failure in one
//! module is logged and collected without halting startup, so the remaining
//! routes still come up against whatever schema did initialize.

use anyhow::Result;
use sqlx::MySqlPool;

use crate::auth::hash_password;
use crate::config::AppConfig;

pub async fn initialize_all(pool: &MySqlPool, config: &AppConfig) {
    let mut failures: Vec<String> = Vec::new();

    let steps: [(&str, std::pin::Pin<Box<dyn std::future::Future<Output = Result<()>> + '_>>); 9] = [
        ("Profile", Box::pin(init_profile(pool))),
        ("Resume", Box::pin(init_resume(pool))),
        ("Projects", Box::pin(init_projects(pool))),
        ("Skills", Box::pin(init_skills(pool))),
        ("Services", Box::pin(init_services(pool))),
        ("Testimonials", Box::pin(init_testimonials(pool))),
        ("Contact", Box::pin(init_contact(pool))),
        ("VisitorCount", Box::pin(init_visitor_count(pool))),
        ("Admin", Box::pin(init_admin(pool, config))),
    ];

    for (name, step) in steps {
        tracing::info!(module = name, "initializing tables");
        match step.await {
            Ok(()) => tracing::info!(module = name, "tables initialized"),
            Err(err) => {
                tracing::error!(module = name, error = %err, "table initialization failed");
                failures.push(format!("{}: {}", name, err));
            }
        }
    }

    if failures.is_empty() {
        tracing::info!("all tables initialized successfully");
    } else {
        tracing::warn!(
            "some table initializations failed: {}",
            failures.join(" | ")
        );
    }
}

async fn init_profile(pool: &MySqlPool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS user_profile (
            id INT AUTO_INCREMENT PRIMARY KEY,
            name VARCHAR(255) NOT NULL,
            bio TEXT NOT NULL,
            header_profile_picture VARCHAR(255) NOT NULL,
            about_profile_picture VARCHAR(255) NOT NULL,
            email VARCHAR(255) NOT NULL,
            phone VARCHAR(20) NOT NULL,
            location VARCHAR(255) NOT NULL,
            linkedin VARCHAR(255) NOT NULL,
            age INT NOT NULL,
            about_footer TEXT NOT NULL,
            created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS social_links (
            id INT AUTO_INCREMENT PRIMARY KEY,
            user_id INT NOT NULL,
            platform VARCHAR(50) NOT NULL,
            url VARCHAR(255) NOT NULL,
            FOREIGN KEY (user_id) REFERENCES user_profile(id) ON DELETE CASCADE
        )
        "#,
    )
    .execute(pool)
    .await?;

    let profiles: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM user_profile")
        .fetch_one(pool)
        .await?;
    if profiles == 0 {
        sqlx::query(
            r#"
            INSERT INTO user_profile
                (name, bio, header_profile_picture, about_profile_picture, email, phone, location, linkedin, age, about_footer)
            VALUES (?, ?, '', '', ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind("Abhay Chaudhary")
        .bind("I am a passionate developer with experience in web and mobile technologies. Dedicated to creating impactful solutions.")
        .bind("chaudharyabhay398@gmail.com")
        .bind("+91 9335847162")
        .bind("Basti [UP]")
        .bind("linkedin.com/in/abhaychaudhary")
        .bind(28)
        .bind("Available for freelance projects and collaborations.")
        .execute(pool)
        .await?;
    }

    let links: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM social_links WHERE user_id = 1")
        .fetch_one(pool)
        .await?;
    if links == 0 {
        for (platform, url) in [
            ("Twitter", "https://twitter.com/abhaychaudhary"),
            ("Facebook", "https://facebook.com/abhaychaudhary"),
            ("Instagram", "https://instagram.com/abhaychaudhary"),
            ("LinkedIn", "https://linkedin.com/in/abhaychaudhary"),
        ] {
            sqlx::query("INSERT INTO social_links (user_id, platform, url) VALUES (1, ?, ?)")
                .bind(platform)
                .bind(url)
                .execute(pool)
                .await?;
        }
    }

    Ok(())
}

/// One of the two drop-and-recreate modules: the resume tables are rebuilt
/// with seed rows on every start.
async fn init_resume(pool: &MySqlPool) -> Result<()> {
    sqlx::query("DROP TABLE IF EXISTS resume_summary, education, certifications, experience")
        .execute(pool)
        .await?;

    sqlx::query(
        r#"
        CREATE TABLE resume_summary (
            id INT AUTO_INCREMENT PRIMARY KEY,
            name VARCHAR(255) NOT NULL,
            profession VARCHAR(255) NOT NULL,
            bio TEXT NOT NULL,
            city VARCHAR(255) NOT NULL,
            phone VARCHAR(20) NOT NULL,
            email VARCHAR(255) NOT NULL,
            created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE education (
            id INT AUTO_INCREMENT PRIMARY KEY,
            degree VARCHAR(255) NOT NULL,
            start_year VARCHAR(4) NOT NULL,
            end_year VARCHAR(10),
            institution VARCHAR(255) NOT NULL,
            description TEXT NOT NULL,
            created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE certifications (
            id INT AUTO_INCREMENT PRIMARY KEY,
            title VARCHAR(255) NOT NULL,
            issuer VARCHAR(255) NOT NULL,
            issue_date VARCHAR(10) NOT NULL,
            description TEXT NOT NULL,
            created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE experience (
            id INT AUTO_INCREMENT PRIMARY KEY,
            title VARCHAR(255) NOT NULL,
            company VARCHAR(255) NOT NULL,
            start_year VARCHAR(4) NOT NULL,
            end_year VARCHAR(10),
            description TEXT NOT NULL,
            created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        INSERT INTO resume_summary (name, profession, bio, city, phone, email)
        VALUES (?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind("Abhay Chaudhary")
    .bind("Innovative and deadline-driven Developer")
    .bind("Passionate developer with a track record of delivering innovative and user-focused web solutions.")
    .bind("New Delhi, India")
    .bind("+91 9876543210")
    .bind("abhay@example.com")
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        INSERT INTO education (degree, start_year, end_year, institution, description)
        VALUES
            ('B.Tech in Computer Science', '2016', '2020', 'XYZ University', 'Graduated with honors, specializing in software engineering.'),
            ('M.Tech in AI', '2021', '2023', 'ABC Institute', 'Focused on machine learning and data science.')
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        INSERT INTO certifications (title, issuer, issue_date, description)
        VALUES
            ('AWS Certified Developer', 'Amazon', '2022-06', 'Certified in cloud development.'),
            ('React Professional', 'Udemy', '2021-12', 'Advanced React and Redux.')
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        INSERT INTO experience (title, company, start_year, end_year, description)
        VALUES
            ('Software Engineer', 'Tech Studio', '2020', '2022', 'Developed and maintained responsive web interfaces. Worked on cross-browser compatibility and performance optimization.'),
            ('Senior Developer', 'Innovate Solutions', '2022', 'Present', 'Led a team to build scalable web applications. Implemented CI/CD pipelines.')
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

/// The other drop-and-recreate module.
async fn init_projects(pool: &MySqlPool) -> Result<()> {
    sqlx::query("DROP TABLE IF EXISTS projects")
        .execute(pool)
        .await?;

    sqlx::query(
        r#"
        CREATE TABLE projects (
            id INT AUTO_INCREMENT PRIMARY KEY,
            title VARCHAR(255) NOT NULL,
            description TEXT NOT NULL,
            image VARCHAR(255) NOT NULL,
            github VARCHAR(255) NOT NULL,
            demo VARCHAR(255) NOT NULL,
            created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        INSERT INTO projects (title, description, image, github, demo)
        VALUES
            ('Portfolio Website',
             'A responsive portfolio website showcasing personal projects, skills, and contact details.',
             '/Uploads/portfolio.png',
             'https://github.com/abhaychaudhary/portfolio',
             'https://abhaychaudhary.github.io/portfolio'),
            ('Task Manager App',
             'A full-stack to-do application built using MERN stack for task management.',
             '/Uploads/task-manager.png',
             'https://github.com/abhaychaudhary/task-manager',
             'https://task-manager-demo.herokuapp.com'),
            ('Weather Forecast App',
             'A weather app that provides current weather and forecasts using OpenWeather API.',
             '/Uploads/weather-app.png',
             'https://github.com/abhaychaudhary/weather-app',
             'https://weather-app-demo.herokuapp.com')
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

async fn init_skills(pool: &MySqlPool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS skills (
            id INT AUTO_INCREMENT PRIMARY KEY,
            name VARCHAR(100) NOT NULL,
            proficiency INT NOT NULL CHECK (proficiency >= 0 AND proficiency <= 100),
            type ENUM('technical', 'soft') NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM skills")
        .fetch_one(pool)
        .await?;
    if count == 0 {
        sqlx::query(
            r#"
            INSERT INTO skills (name, proficiency, type) VALUES
                ('HTML', 80, 'technical'),
                ('Communication', 85, 'soft'),
                ('CSS', 80, 'technical'),
                ('Teamwork', 90, 'soft'),
                ('JavaScript', 80, 'technical')
            "#,
        )
        .execute(pool)
        .await?;
    }

    Ok(())
}

async fn init_services(pool: &MySqlPool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS services (
            id INT AUTO_INCREMENT PRIMARY KEY,
            title VARCHAR(100) NOT NULL,
            description TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM services")
        .fetch_one(pool)
        .await?;
    if count == 0 {
        sqlx::query(
            r#"
            INSERT INTO services (title, description) VALUES
                ('Web Development', 'Building responsive and modern websites with the latest technologies.'),
                ('Mobile App Development', 'Creating intuitive and high-performance mobile applications.'),
                ('UI/UX Design', 'Designing user-friendly interfaces with a focus on experience.'),
                ('Cloud Solutions', 'Providing scalable and secure cloud-based services.'),
                ('Technical Support', 'Offering expert support and maintenance for your projects.')
            "#,
        )
        .execute(pool)
        .await?;
    }

    Ok(())
}

async fn init_testimonials(pool: &MySqlPool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS testimonials (
            id INT AUTO_INCREMENT PRIMARY KEY,
            content TEXT NOT NULL,
            author VARCHAR(100) NOT NULL,
            role VARCHAR(100) NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM testimonials")
        .fetch_one(pool)
        .await?;
    if count == 0 {
        sqlx::query(
            r#"
            INSERT INTO testimonials (content, author, role) VALUES
                ('Amazing work on my website, highly professional and creative!', 'John Doe', 'CEO, TechCorp'),
                ('The app exceeded my expectations with its smooth performance.', 'Jane Smith', 'Product Manager'),
                ('Excellent design skills, made my project stand out!', 'Mike Johnson', 'Marketing Head'),
                ('Reliable and efficient cloud solutions, highly recommended.', 'Sarah Williams', 'CTO, Cloud Innovations'),
                ('Great support team, always there when I need them!', 'Robert Brown', 'Freelancer')
            "#,
        )
        .execute(pool)
        .await?;
    }

    Ok(())
}

async fn init_contact(pool: &MySqlPool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS contact_info (
            id INT PRIMARY KEY,
            address VARCHAR(255) NOT NULL,
            phone VARCHAR(20) NOT NULL,
            email VARCHAR(255) NOT NULL,
            mapUrl TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        INSERT INTO contact_info (id, address, phone, email, mapUrl)
        VALUES (1, ?, ?, ?, ?)
        ON DUPLICATE KEY UPDATE id = id
        "#,
    )
    .bind("A108 Adam Street, New York, NY 535022")
    .bind("+1 5589 55488 55")
    .bind("info@example.com")
    .bind("https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d3021.811727658067!2d-74.01322218459495!3d40.710451879330984!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x89c25a175e5d6fa1%3A0x88eec7d7fdf0a9ec!2sDowntown%20Conference%20Center!5e0!3m2!1sen!2sus!4v1614550682036!5m2!1sen!2sus")
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS contact_submissions (
            id INT AUTO_INCREMENT PRIMARY KEY,
            name VARCHAR(255) NOT NULL,
            email VARCHAR(255) NOT NULL,
            subject VARCHAR(255) NOT NULL,
            message TEXT NOT NULL,
            created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

async fn init_visitor_count(pool: &MySqlPool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS visitor_count (
            id INT PRIMARY KEY AUTO_INCREMENT,
            count INT NOT NULL DEFAULT 0,
            updated_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP ON UPDATE CURRENT_TIMESTAMP
        )
        "#,
    )
    .execute(pool)
    .await?;

    let existing: Option<i32> = sqlx::query_scalar("SELECT 1 FROM visitor_count WHERE id = 1")
        .fetch_optional(pool)
        .await?;
    if existing.is_none() {
        sqlx::query("INSERT INTO visitor_count (count) VALUES (0)")
            .execute(pool)
            .await?;
    }

    Ok(())
}

async fn init_admin(pool: &MySqlPool, config: &AppConfig) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS admins (
            id INT AUTO_INCREMENT PRIMARY KEY,
            admin_id VARCHAR(50) UNIQUE NOT NULL,
            password VARCHAR(255) NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    let existing: Option<i32> = sqlx::query_scalar("SELECT id FROM admins WHERE admin_id = ?")
        .bind(&config.admin_id)
        .fetch_optional(pool)
        .await?;
    if existing.is_none() {
        let hash = hash_password(&config.admin_password)
            .map_err(|e| anyhow::anyhow!("failed to hash admin password: {}", e))?;
        sqlx::query("INSERT INTO admins (admin_id, password) VALUES (?, ?)")
            .bind(&config.admin_id)
            .bind(hash)
            .execute(pool)
            .await?;
        tracing::info!(admin_id = %config.admin_id, "default admin created");
    }

    Ok(())
}
