//! ポートフォリオ表示コンポーネント
//!
//! 並びはAIが返した順のまま表示する。見た目はテーマ別CSSクラスで切り替える。

use folio_common::export::PORTFOLIO_ELEMENT_ID;
use folio_common::{PortfolioData, Theme};
use leptos::prelude::*;

#[component]
pub fn PortfolioPreview(
    data: PortfolioData,
    theme: Theme,
    photo_url: Option<String>,
) -> impl IntoView {
    let PortfolioData {
        name,
        title,
        tagline,
        about,
        skills,
        experiences,
        education,
        projects,
        contact,
    } = data;

    view! {
        <div id=PORTFOLIO_ELEMENT_ID class=format!("portfolio theme-{}", theme.as_str())>
            <section class="hero">
                {photo_url.map(|url| view! { <img class="avatar" src=url alt=name.clone() /> })}
                <h1 class="name">{name.clone()}</h1>
                <h2 class="title">{title}</h2>
                <p class="tagline">{tagline}</p>
            </section>

            <section class="about">
                <h3>"About Me"</h3>
                <p>{about}</p>
            </section>

            <section class="skills">
                <h3>"Skills"</h3>
                <ul class="skill-list">
                    {skills
                        .into_iter()
                        .map(|skill| view! { <li class="skill">{skill}</li> })
                        .collect_view()}
                </ul>
            </section>

            <section class="experience">
                <h3>"Experience"</h3>
                {experiences
                    .into_iter()
                    .map(|exp| {
                        view! {
                            <article class="experience-item">
                                <div class="experience-head">
                                    <h4>{exp.role}</h4>
                                    <span class="duration">{exp.duration}</span>
                                </div>
                                <p class="company">{exp.company}</p>
                                <ul>
                                    {exp.description
                                        .into_iter()
                                        .map(|line| view! { <li>{line}</li> })
                                        .collect_view()}
                                </ul>
                            </article>
                        }
                    })
                    .collect_view()}
            </section>

            <section class="projects">
                <h3>"Projects"</h3>
                {projects
                    .into_iter()
                    .map(|project| {
                        view! {
                            <article class="project-card">
                                <h4>{project.title}</h4>
                                <p>{project.description}</p>
                                <div class="tech-list">
                                    {project.technologies
                                        .into_iter()
                                        .map(|tech| view! { <span class="tech">{tech}</span> })
                                        .collect_view()}
                                </div>
                            </article>
                        }
                    })
                    .collect_view()}
            </section>

            <section class="education">
                <h3>"Education"</h3>
                {education
                    .into_iter()
                    .map(|edu| {
                        view! {
                            <article class="education-item">
                                <h4>{edu.degree}</h4>
                                <p>{edu.institution}</p>
                                <span class="year">{edu.year}</span>
                            </article>
                        }
                    })
                    .collect_view()}
            </section>

            <section class="contact">
                <h3>"Get In Touch"</h3>
                <a class="email" href=format!("mailto:{}", contact.email)>{contact.email.clone()}</a>
                <p class="location">{contact.location}</p>
                <div class="socials">
                    {contact.socials
                        .into_iter()
                        .map(|social| {
                            view! {
                                <a href=social.url target="_blank" rel="noopener noreferrer">
                                    {social.platform}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </section>
        </div>
    }
}
