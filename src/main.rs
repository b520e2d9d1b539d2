#[actix_web::main]
async fn main() -> std::io::Result<()> {
    csv_gateway_lib::run().await
}
