/* recipe-books
 * Copyright (C) 2025 Frederic Henrichs <frederic@tinkerforge.com>
 *
 * This library is free software; you can redistribute it and/or
 * modify it under the terms of the GNU Lesser General Public
 * License as published by the Free Software Foundation; either
 * version 2 of the License, or (at your option) any later version.
 *
 * This library is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the GNU
 * Lesser General Public License for more details.
 *
 * You should have received a copy of the GNU Lesser General Public
 * License along with this library; if not, write to the
 * Free Software Foundation, Inc., 59 Temple Place - Suite 330,
 * Boston, MA 02111-1307, USA.
 */


use std::sync::Arc;

use actix_files::Files;
use actix_web::{
    middleware::{Compress, Logger},
    web, App, HttpServer,
};
use anyhow::Context;
use db_connector::{get_connection_pool, run_migrations};
use recipe_backend::{
    config::Settings, hasher::HasherManager, recipe_api::EdamamClient, routes, AppState,
};
use simplelog::{
    ColorChoice, CombinedLogger, ConfigBuilder, LevelFilter, SharedLogger, TermLogger,
    TerminalMode,
};

#[cfg(not(debug_assertions))]
use simplelog::WriteLogger;

fn init_logging(log_file: Option<&str>) -> anyhow::Result<()> {
    let mut builder = ConfigBuilder::new();
    builder.set_time_format_rfc3339();
    // Falls back to UTC when the local offset cannot be determined
    let _ = builder.set_time_offset_to_local();
    let log_config = builder.build();

    #[cfg(debug_assertions)]
    let loggers: Vec<Box<dyn SharedLogger>> = {
        let _ = log_file;
        vec![TermLogger::new(
            LevelFilter::Debug,
            log_config,
            TerminalMode::Mixed,
            ColorChoice::Auto,
        )]
    };

    #[cfg(not(debug_assertions))]
    let loggers: Vec<Box<dyn SharedLogger>> = {
        let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
            LevelFilter::Info,
            log_config.clone(),
            TerminalMode::Mixed,
            ColorChoice::Auto,
        )];
        if let Some(path) = log_file {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {path}"))?;
            loggers.push(WriteLogger::new(LevelFilter::Info, log_config, file));
        }
        loggers
    };

    CombinedLogger::init(loggers).context("Failed to initialize logger")?;

    Ok(())
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let settings = Settings::from_env()?;
    init_logging(settings.log_file.as_deref())?;

    let pool = get_connection_pool();
    {
        let mut conn = pool.get().context("Failed to get connection from pool")?;
        run_migrations(&mut conn)
            .map_err(|err| anyhow::anyhow!("Failed to run migrations: {err}"))?;
    }

    let state = web::Data::new(AppState {
        pool,
        jwt_secret: settings.jwt_secret.clone(),
        hasher: HasherManager::default(),
        recipe_api: Arc::new(EdamamClient::new(settings.recipe_api.clone())),
    });

    let static_files_dir = settings.static_files_dir.clone();
    let server = HttpServer::new(move || {
        let mut app = App::new()
            .wrap(Compress::default())
            .wrap(Logger::default())
            .app_data(state.clone())
            .configure(routes::configure)
            .default_service(web::to(routes::not_found));
        if let Some(dir) = &static_files_dir {
            app = app.service(Files::new("/static", dir));
        }
        app
    });

    log::info!("Listening on {}", settings.bind_address);
    server.bind(&settings.bind_address)?.run().await?;

    Ok(())
}
